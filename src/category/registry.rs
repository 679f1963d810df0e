//! The set of category names a transaction may use, per kind.

use crate::{
    Error,
    category::{CategoryName, CustomCategories, TransactionKind},
};

/// The default categories plus the categories the user has added.
///
/// Names are unique within a kind across both lists, but the same name may be
/// used by both kinds. Custom names are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    custom: CustomCategories,
}

impl CategoryRegistry {
    /// Create a registry from previously saved custom categories.
    pub fn new(custom: CustomCategories) -> Self {
        Self { custom }
    }

    /// The custom categories, in the shape they are persisted.
    pub fn custom(&self) -> &CustomCategories {
        &self.custom
    }

    /// The default and custom categories for `kind`.
    pub fn categories(&self, kind: TransactionKind) -> (&'static [&'static str], &[String]) {
        (kind.default_categories(), self.custom.for_kind(kind))
    }

    /// Whether `name` is a default or custom category of `kind`.
    ///
    /// The comparison is exact and case-sensitive.
    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        kind.default_categories().contains(&name)
            || self.custom.for_kind(kind).iter().any(|custom| custom == name)
    }

    /// Append a custom category for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if `name` is blank and
    /// [Error::DuplicateCategory] if the trimmed name already exists for `kind`.
    /// The registry is left unchanged on error.
    pub fn add_category(
        &mut self,
        kind: TransactionKind,
        name: &str,
    ) -> Result<CategoryName, Error> {
        let name = CategoryName::new(name)?;

        if self.contains(kind, name.as_ref()) {
            return Err(Error::DuplicateCategory {
                kind,
                name: name.to_string(),
            });
        }

        self.custom.for_kind_mut(kind).push(name.to_string());

        Ok(name)
    }

    /// Undo the most recent [CategoryRegistry::add_category] for `kind`.
    pub(crate) fn remove_last(&mut self, kind: TransactionKind) {
        self.custom.for_kind_mut(kind).pop();
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        category::{CategoryRegistry, CustomCategories, TransactionKind},
    };

    #[test]
    fn starts_with_default_categories() {
        let registry = CategoryRegistry::default();

        let (defaults, custom) = registry.categories(TransactionKind::Income);

        assert_eq!(
            defaults,
            &["Salary", "Business", "Investment", "Freelance", "Other Income"]
        );
        assert!(custom.is_empty());
    }

    #[test]
    fn rejects_existing_default_category() {
        let mut registry = CategoryRegistry::default();

        let result = registry.add_category(TransactionKind::Expense, "Food");

        assert_eq!(
            result,
            Err(Error::DuplicateCategory {
                kind: TransactionKind::Expense,
                name: "Food".to_owned()
            })
        );
        assert!(registry.custom().expense.is_empty());
    }

    #[test]
    fn rejects_existing_custom_category_after_trimming() {
        let mut registry = CategoryRegistry::default();
        registry
            .add_category(TransactionKind::Expense, "Rent")
            .unwrap();

        let result = registry.add_category(TransactionKind::Expense, "  Rent ");

        assert!(matches!(result, Err(Error::DuplicateCategory { .. })));
        assert_eq!(registry.custom().expense, vec!["Rent".to_owned()]);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut registry = CategoryRegistry::default();

        let result = registry.add_category(TransactionKind::Expense, "food");

        assert!(result.is_ok());
        assert!(registry.contains(TransactionKind::Expense, "food"));
        assert!(registry.contains(TransactionKind::Expense, "Food"));
    }

    #[test]
    fn same_name_allowed_for_both_kinds() {
        let mut registry = CategoryRegistry::default();

        registry
            .add_category(TransactionKind::Income, "Gifts")
            .unwrap();
        registry
            .add_category(TransactionKind::Expense, "Gifts")
            .unwrap();

        assert_eq!(
            registry.custom(),
            &CustomCategories {
                income: vec!["Gifts".to_owned()],
                expense: vec!["Gifts".to_owned()],
            }
        );
    }

    #[test]
    fn custom_categories_keep_insertion_order() {
        let mut registry = CategoryRegistry::default();

        for name in ["Rent", "Gym", "Books"] {
            registry
                .add_category(TransactionKind::Expense, name)
                .unwrap();
        }

        let (_, custom) = registry.categories(TransactionKind::Expense);
        assert_eq!(custom, &["Rent", "Gym", "Books"]);
    }

    #[test]
    fn rejects_blank_name() {
        let mut registry = CategoryRegistry::default();

        let result = registry.add_category(TransactionKind::Income, "  ");

        assert_eq!(result, Err(Error::EmptyCategoryName));
        assert_eq!(registry, CategoryRegistry::default());
    }

    #[test]
    fn contains_is_per_kind() {
        let registry = CategoryRegistry::default();

        assert!(registry.contains(TransactionKind::Income, "Salary"));
        assert!(!registry.contains(TransactionKind::Expense, "Salary"));
    }
}
