use crate::model::farmer::Farmer;

/// Farmers whose name contains `term`, ignoring case.
///
/// Entries without a name are never shown, even for an empty term.
pub fn search(farmers: &[Farmer], term: &str) -> Vec<Farmer> {
    let needle = term.to_lowercase();
    farmers
        .iter()
        .filter(|farmer| {
            farmer
                .display_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
