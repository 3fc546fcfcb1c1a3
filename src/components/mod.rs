//! Reusable view components: navigation, form, tables, and small badges.

pub mod donations_table;
pub mod institutions_table;
pub mod login_form;
pub mod sidebar;
pub mod spinner;
pub mod stat_card;
pub mod status_badge;
