pub mod info_card;
pub mod pagination_controls;
pub mod toast;
