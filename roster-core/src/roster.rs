use crate::draw::{draw_index, Selection, MIN_PARTICIPANTS};
use crate::error::{AddError, ClearError, ExportError, PickError, RemoveError};
use rand::Rng;

/// Ordered, duplicate-free list of participant names.
///
/// Every stored name is trimmed and non-empty, and no two names are equal
/// under exact comparison. Failed operations leave the roster untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster by adding each name in order, stopping at the first
    /// rejected one.
    pub fn from_names<I, S>(names: I) -> Result<Self, AddError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Snapshot of the names in insertion order
    pub fn list(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Append a participant. Surrounding whitespace is trimmed first.
    pub fn add(&mut self, name: &str) -> Result<(), AddError> {
        let name = name.trim();

        if name.is_empty() {
            tracing::debug!("Rejected empty name");
            return Err(AddError::EmptyName);
        }

        if self.contains(name) {
            tracing::debug!("Rejected duplicate name {}", name);
            return Err(AddError::DuplicateName(name.to_string()));
        }

        self.names.push(name.to_string());
        tracing::info!("Added {} ({} in roster)", name, self.names.len());
        Ok(())
    }

    /// Remove the participant at `index` and return their name
    pub fn remove(&mut self, index: usize) -> Result<String, RemoveError> {
        let len = self.names.len();
        if index >= len {
            tracing::debug!("Rejected removal at {} from roster of {}", index, len);
            return Err(RemoveError::IndexOutOfRange { index, len });
        }

        let name = self.names.remove(index);
        tracing::info!("Removed {} ({} left)", name, self.names.len());
        Ok(name)
    }

    pub fn clear(&mut self) -> Result<(), ClearError> {
        if self.names.is_empty() {
            return Err(ClearError::AlreadyEmpty);
        }

        let dropped = self.names.len();
        self.names.clear();
        tracing::info!("Cleared roster ({} removed)", dropped);
        Ok(())
    }

    /// Draw one participant with the thread-local generator
    pub fn draw(&self) -> Result<Selection, PickError> {
        self.draw_with(&mut rand::rng())
    }

    /// Draw one participant, each with probability `1 / len`.
    ///
    /// The roster is not modified, so repeated draws are independent.
    pub fn draw_with<R: Rng>(&self, rng: &mut R) -> Result<Selection, PickError> {
        let size = self.names.len();
        if size < MIN_PARTICIPANTS {
            tracing::debug!("Refused draw on roster of {}", size);
            return Err(PickError::NotEnoughParticipants { size });
        }

        let index = draw_index(rng, size).ok_or(PickError::NotEnoughParticipants { size })?;
        let name = self.names[index].clone();

        tracing::info!("Drew {} (position {} of {})", name, index + 1, size);
        Ok(Selection::new(name, index, size))
    }

    pub fn pick(&self) -> Result<String, PickError> {
        self.draw().map(|selection| selection.name)
    }

    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> Result<String, PickError> {
        self.draw_with(rng).map(|selection| selection.name)
    }

    /// Names joined by `\n`, without a trailing newline.
    ///
    /// Names are stored as given apart from trimming, so a name with an
    /// embedded line break spans several lines here.
    pub fn export(&self) -> Result<String, ExportError> {
        if self.names.is_empty() {
            return Err(ExportError::EmptyRoster);
        }
        Ok(self.names.join("\n"))
    }
}
