//! Page-level components. The site has a single page; routing would be
//! overkill for five in-page sections.

pub mod home;
