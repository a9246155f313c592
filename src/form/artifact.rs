use super::{Offering, Step};
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A validated, evaluation-ready form: the compiler's output and the unit of
/// handoff from the authoring collaborator to the runtime.
///
/// Steps are sorted ascending by step number; that order is the fallback
/// linear order when no navigation rule fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledForm {
    pub steps: Vec<Step>,
    pub offerings: Vec<Offering>,
}

impl CompiledForm {
    pub fn first_step(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn step(&self, step_number: u32) -> Option<&Step> {
        self.steps
            .binary_search_by_key(&step_number, |step| step.step_number)
            .ok()
            .map(|index| &self.steps[index])
    }

    /// The step with the smallest number greater than `step_number`, if any.
    pub fn next_step_after(&self, step_number: u32) -> Option<&Step> {
        self.steps
            .iter()
            .find(|step| step.step_number > step_number)
    }

    pub fn offering(&self, id: &str) -> Option<&Offering> {
        self.offerings.iter().find(|offering| offering.id == id)
    }

    /// Saves the compiled form to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a compiled form from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled form from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(form, _)| form) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
