//! Paged-scroll navigation events.
//!
//! A paged-scroll host (a pager, a carousel, a tab swiper) reports three raw
//! signals: continuous scroll progress, the committed page, and scroll phase
//! transitions.  [`core::ScrollEventDispatcher`] turns them into ordered
//! `enter` / `leave` / `select` / `deselect` callbacks per page, so title and
//! indicator views can animate without doing any scroll math themselves.

pub mod core;
