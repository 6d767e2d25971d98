use std::str::FromStr;

use crate::error::AtmError;
use crate::models::transaction::Amount;

/// Option picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Withdraw,
    Deposit,
    CheckBalance,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| AtmError::InvalidInput(s.trim().to_string()))?;

        match number {
            1 => Ok(MenuChoice::Withdraw),
            2 => Ok(MenuChoice::Deposit),
            3 => Ok(MenuChoice::CheckBalance),
            4 => Ok(MenuChoice::Exit),
            other => Err(AtmError::InvalidOption(other)),
        }
    }
}

/// Operation against the session balance, ready to be applied.
#[derive(Debug, Clone)]
pub enum Command {
    Withdraw { amount: Amount },
    Deposit { amount: Amount },
    CheckBalance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing_success_cases() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Withdraw);
        assert_eq!(" 2 ".parse::<MenuChoice>().unwrap(), MenuChoice::Deposit);
        assert_eq!(
            "3\n".parse::<MenuChoice>().unwrap(),
            MenuChoice::CheckBalance
        );
        assert_eq!("+4".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_parsing_failure_cases() {
        match "withdraw".parse::<MenuChoice>() {
            Err(AtmError::InvalidInput(text)) => assert_eq!(text, "withdraw"),
            other => panic!("Expected invalid input, got {:?}", other),
        }

        assert!(matches!(
            "".parse::<MenuChoice>(),
            Err(AtmError::InvalidInput(_))
        ));
        assert!(matches!(
            "0".parse::<MenuChoice>(),
            Err(AtmError::InvalidOption(0))
        ));
        assert!(matches!(
            "5".parse::<MenuChoice>(),
            Err(AtmError::InvalidOption(5))
        ));
        assert!(matches!(
            "-1".parse::<MenuChoice>(),
            Err(AtmError::InvalidOption(-1))
        ));
    }
}
