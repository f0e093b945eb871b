//! Per-telegram-type grammar tables.
//!
//! Warehouse confirmations (the `*Q` types) carry both a hand-maintained
//! decode table and a convert table; host-authored telegrams only carry a
//! convert table, their parsing view is derived from it.

pub(crate) mod art;
pub(crate) mod ausk;
pub(crate) mod auskq;
pub(crate) mod ausp;
pub(crate) mod kretk;
pub(crate) mod kretkq;
pub(crate) mod kretp;
pub(crate) mod kretpq;
pub(crate) mod kst;
pub(crate) mod lst;
pub(crate) mod watekq;
pub(crate) mod watepq;
pub(crate) mod weak;
pub(crate) mod weakq;
pub(crate) mod weap;
pub(crate) mod weapq;
