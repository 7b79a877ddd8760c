//! Intermediate representation of block content.
//!
//! This module defines the content node tree shared by every transform and
//! the attribute records of the text, heading and quote blocks.

pub mod attributes;
pub mod nodes;
