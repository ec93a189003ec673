//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard components read and write the page's `RwSignal<DashboardState>`
//! and submit mutations through a shared `Callback<Mutation>`. `protected`
//! gates routes on the stored session token.

pub mod feedback_banner;
pub mod inventory_tab;
pub mod product_create_tab;
pub mod product_list_tab;
pub mod product_modal;
pub mod protected;
pub mod stock_tab;
pub mod tab_bar;
