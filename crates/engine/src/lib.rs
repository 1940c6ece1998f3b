//! Expense store.
//!
//! [`Engine`] owns every [`Expense`] and is the only writer of the backing
//! JSON file. All operations take the same lock for their whole duration,
//! file write included, so they are observed strictly one after the other.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use error::EngineError;
pub use expense::{DATE_FORMAT, Expense, today};
pub use summary::Summary;

mod error;
mod expense;
mod storage;
pub mod summary;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    state: Mutex<State>,
    path: Option<PathBuf>,
}

#[derive(Debug)]
struct State {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl State {
    fn new(expenses: Vec<Expense>) -> ResultEngine<Self> {
        let next_id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(ids_exhausted)?;
        Ok(Self { expenses, next_id })
    }
}

fn ids_exhausted() -> EngineError {
    EngineError::InvalidInput("no expense ids left".to_string())
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Backing file, `None` when the engine only lives in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // Every mutation leaves the state consistent before returning, so a
    // poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, expenses: &[Expense]) -> ResultEngine<()> {
        match &self.path {
            Some(path) => storage::save(path, expenses),
            None => Ok(()),
        }
    }

    /// All expenses in insertion order.
    pub fn list(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    /// Store `expense`, assigning the next id and, when blank, today's date.
    /// Invalid input is rejected before anything is stored.
    ///
    /// If the backing file cannot be written the expense is not kept and its
    /// id is handed out again by the next call.
    pub fn create(&self, mut expense: Expense) -> ResultEngine<Expense> {
        expense.validate()?;
        let mut state = self.lock();
        let next_id = state.next_id.checked_add(1).ok_or_else(ids_exhausted)?;

        expense.id = state.next_id;
        expense.fill_date();
        state.expenses.push(expense.clone());

        if let Err(err) = self.persist(&state.expenses) {
            state.expenses.pop();
            return Err(err);
        }

        state.next_id = next_id;
        Ok(expense)
    }

    pub fn get(&self, id: u64) -> ResultEngine<Expense> {
        self.lock()
            .expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EngineError::NotFound(id))
    }

    /// Remove the expense with `id`. Nothing is written when it does not
    /// exist.
    pub fn delete(&self, id: u64) -> ResultEngine<()> {
        let mut state = self.lock();

        let index = state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(EngineError::NotFound(id))?;
        let removed = state.expenses.remove(index);

        if let Err(err) = self.persist(&state.expenses) {
            state.expenses.insert(index, removed);
            return Err(err);
        }

        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.lock().expenses)
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    path: Option<PathBuf>,
}

impl EngineBuilder {
    /// Persist to `path`. An empty path keeps the engine in memory.
    pub fn path(mut self, path: impl Into<PathBuf>) -> EngineBuilder {
        let path = path.into();
        self.path = (!path.as_os_str().is_empty()).then_some(path);
        self
    }

    /// Construct `Engine`, loading the backing file if there is one.
    pub fn build(self) -> ResultEngine<Engine> {
        let expenses = match &self.path {
            Some(path) => storage::load(path)?,
            None => Vec::new(),
        };

        Ok(Engine {
            state: Mutex::new(State::new(expenses)?),
            path: self.path,
        })
    }
}
