pub mod analysis_panel;
pub mod profile_card;
pub mod status_view;
pub mod token_form;
