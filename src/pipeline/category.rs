//! Category|value splitting of raw answers.
//!
//! Some answers arrive as `category | value` pairs, where only the value
//! describes the profession. A few roles are meaningless without their
//! category (`IT | Аналитик`) and keep it.

use serde::{Deserialize, Serialize};

/// Rules for selecting the informative part of a `category|value` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    /// Separator between category and value.
    pub separator: char,
    /// Category whose listed roles keep the category attached.
    pub sentinel_category: String,
    /// Roles that stay concatenated with the sentinel category.
    pub joined_roles: Vec<String>,
    /// Prefix rewritten in the selected value, e.g. `IT-` to `IT `.
    pub prefix_rewrite: Option<(String, String)>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        CategoryRules {
            separator: '|',
            sentinel_category: "IT".to_string(),
            joined_roles: vec![
                "Администратор".to_string(),
                "Аналитик".to_string(),
                "Архитектор".to_string(),
            ],
            prefix_rewrite: Some(("IT-".to_string(), "IT ".to_string())),
        }
    }
}

impl CategoryRules {
    /// Select the part of `answer` that describes the profession.
    ///
    /// Answers without the separator are returned unchanged.
    pub fn select(&self, answer: &str) -> String {
        if !answer.contains(self.separator) {
            return answer.to_string();
        }

        let parts: Vec<&str> = answer.split(self.separator).map(str::trim).collect();
        let category = parts[0];
        let value = parts.get(1).copied().unwrap_or_default();

        if category == self.sentinel_category && self.joined_roles.iter().any(|r| r == value) {
            return parts.join(" ");
        }

        match &self.prefix_rewrite {
            Some((from, to)) if value.contains(from.as_str()) => value.replace(from.as_str(), to),
            _ => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_answer_unchanged() {
        let rules = CategoryRules::default();
        assert_eq!(rules.select("Менеджер по продажам"), "Менеджер по продажам");
        assert_eq!(rules.select(""), "");
    }

    #[test]
    fn test_value_selected() {
        let rules = CategoryRules::default();
        assert_eq!(
            rules.select("Продажи | Менеджер по продажам"),
            "Менеджер по продажам"
        );
    }

    #[test]
    fn test_sentinel_roles_stay_joined() {
        let rules = CategoryRules::default();
        assert_eq!(rules.select("IT | Аналитик"), "IT Аналитик");
        assert_eq!(rules.select("IT|Архитектор"), "IT Архитектор");
        assert_eq!(rules.select("IT | Программист"), "Программист");
        assert_eq!(rules.select("Финансы | Аналитик"), "Аналитик");
    }

    #[test]
    fn test_prefix_rewrite() {
        let rules = CategoryRules::default();
        assert_eq!(rules.select("IT | IT-специалист"), "IT специалист");
        assert_eq!(rules.select("Связь | IT-инженер"), "IT инженер");
    }

    #[test]
    fn test_missing_value() {
        let rules = CategoryRules::default();
        assert_eq!(rules.select("Продажи |"), "");
        assert_eq!(rules.select("|"), "");
    }
}
