pub mod export_service;
pub mod navigation_service;
pub mod notification_service;
pub mod onboarding_service;
pub mod pattern_service;
pub mod random_walk;
pub mod scheduler;
pub mod simulation_service;
pub mod theme_service;
pub mod tour_service;
pub mod trading_service;
pub mod watchlist_service;
