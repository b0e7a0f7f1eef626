mod client;
mod pages;

pub use client::NotionClient;
pub use pages::{
    Page, PageProperties, QueryResponse, TitleProperty, TitleText, pending_filter,
    update_properties,
};
