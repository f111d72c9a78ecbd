//! Reusable UI components shared by pages.

pub mod account_bar;
