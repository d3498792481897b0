//! Tests for savings goal domain models.

#[cfg(test)]
mod tests {
    use crate::goals::SavingsGoal;
    use rust_decimal_macros::dec;

    fn goal(target: rust_decimal::Decimal) -> SavingsGoal {
        SavingsGoal {
            id: "goal-1".to_string(),
            name: "New camera".to_string(),
            target_amount: target,
            target_date: None,
            start_date: None,
            currency: "EUR".to_string(),
            order: 1,
            object_group: None,
        }
    }

    #[test]
    fn test_validate_accepts_positive_target() {
        assert!(goal(dec!(1000)).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_target_as_unbounded() {
        let g = goal(dec!(0));
        assert!(g.validate().is_ok());
        assert!(g.is_unbounded());
    }

    #[test]
    fn test_validate_rejects_negative_target() {
        assert!(goal(dec!(-1)).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut g = goal(dec!(100));
        g.name = "  ".to_string();
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_goal_serializes_camel_case() {
        let json = serde_json::to_value(goal(dec!(100))).unwrap();
        assert!(json.get("targetAmount").is_some());
        assert!(json.get("objectGroup").is_some());
        assert!(json.get("target_amount").is_none());
    }
}
