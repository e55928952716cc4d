//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod calendar;
pub mod entities;
pub mod errors;
pub mod format;

pub use entities::{
    ChatResponse, DateRange, MealEntry, MealSlot, QuickAction, QuickReply, ScheduleEntry,
};
pub use errors::DomainError;
