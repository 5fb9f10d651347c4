//! I/O utilities for metadata container reading
//!
//! This module provides traits and implementations for seekable,
//! byte-order-aware reads used by the EXIF reader.

pub mod seekable;
pub mod byte_order;
