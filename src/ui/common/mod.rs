//! Common reusable UI components
//!
//! Components shared by the portal pages: badges, form inputs, messages,
//! dialogs and spinners.

pub mod badge;
pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use badge::{Badge, BadgeSize, GradeBadge, RoleBadge, StatusBadge};
pub use form::{FormField, SearchInput};
pub use message::{EmptyState, ErrorMessage, SuccessMessage};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{FullPageSpinner, LoadingSpinner, Spinner, SpinnerSize};
