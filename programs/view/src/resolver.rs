//! Fallback resolution: local override or external oracle
//!
//! Each fact has one presence flag owned by the ledger (activation,
//! initialized balance, nonzero stored price). The caller turns that flag
//! into an `Option`; [`select`] picks the source and [`ValueSource::fetch`]
//! produces the value. The oracle is only invoked when no override exists.

use core::fmt::Debug;

use ledgerview_oracle::OracleError;

use crate::error::ViewError;

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Local,
    Oracle,
}

/// A source able to produce one value of `T`
pub trait ValueSource<T> {
    fn origin(&self) -> Origin;

    fn fetch(self) -> Result<T, ViewError>;
}

/// Value already recorded in the simulated ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalStore<T>(pub T);

impl<T> ValueSource<T> for LocalStore<T> {
    fn origin(&self) -> Origin {
        Origin::Local
    }

    fn fetch(self) -> Result<T, ViewError> {
        Ok(self.0)
    }
}

/// Deferred call into the external oracle
pub struct OracleDelegate<F>(pub F);

impl<T, F> ValueSource<T> for OracleDelegate<F>
where
    F: FnOnce() -> Result<T, OracleError>,
{
    fn origin(&self) -> Origin {
        Origin::Oracle
    }

    fn fetch(self) -> Result<T, ViewError> {
        (self.0)().map_err(ViewError::from)
    }
}

/// Either source, chosen by the presence flag
pub enum Fallback<T, F> {
    Local(LocalStore<T>),
    Oracle(OracleDelegate<F>),
}

impl<T, F> ValueSource<T> for Fallback<T, F>
where
    F: FnOnce() -> Result<T, OracleError>,
{
    fn origin(&self) -> Origin {
        match self {
            Fallback::Local(s) => s.origin(),
            Fallback::Oracle(s) => s.origin(),
        }
    }

    fn fetch(self) -> Result<T, ViewError> {
        match self {
            Fallback::Local(s) => s.fetch(),
            Fallback::Oracle(s) => s.fetch(),
        }
    }
}

/// Pick the local override if present, the oracle otherwise
pub fn select<T, F>(local: Option<T>, oracle: F) -> Fallback<T, F>
where
    F: FnOnce() -> Result<T, OracleError>,
{
    match local {
        Some(value) => Fallback::Local(LocalStore(value)),
        None => Fallback::Oracle(OracleDelegate(oracle)),
    }
}

/// Select and fetch, logging which source answered `fact`
pub fn resolve<T, F>(fact: &str, local: Option<T>, oracle: F) -> Result<T, ViewError>
where
    T: Debug,
    F: FnOnce() -> Result<T, OracleError>,
{
    let source = select(local, oracle);
    let origin = source.origin();

    match source.fetch() {
        Ok(value) => {
            log::trace!("{}: {:?} from {:?}", fact, value, origin);
            Ok(value)
        }
        Err(e) => {
            log::warn!("{}: {:?} source failed: {}", fact, origin, e);
            Err(e)
        }
    }
}
