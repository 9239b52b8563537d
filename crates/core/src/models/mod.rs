pub mod app_state;
pub mod chart;
pub mod config;
pub mod event;
pub mod notification;
pub mod onboarding;
pub mod order;
pub mod pattern;
pub mod portfolio;
pub mod position;
pub mod theme;
pub mod tour;
pub mod view;
pub mod watchlist;
