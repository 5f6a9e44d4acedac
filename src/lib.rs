#![allow(non_snake_case)]
//! Gauss-Legendre quadrature of t^6 - t^2 sin(2t) and of its Taylor-truncated
//! polynomial counterparts, with a search for the smallest Taylor degree and
//! node count that reproduce the exact polynomial integral.
pub mod Utils;
pub mod numerical;
pub mod symbolic;
