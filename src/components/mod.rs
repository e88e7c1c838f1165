pub mod chart;
pub mod confirm_dialog;
pub mod empty_state;
pub mod fields;
pub mod filters;
pub mod icons;
pub mod layout;
pub mod loading;
pub mod page_header;
pub mod paginator;
pub mod stat_card;
pub mod status_chip;
pub mod toast;
