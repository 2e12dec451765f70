use crate::layers::marker::Marker;

/// The mutable marker collection backing the overlay layer.
///
/// Exactly one source exists per viewer instance and the viewer owns it
/// exclusively. All updates go through `clear` or `set_markers`; the
/// latter is the atomic refresh primitive (clear, then bulk insert, in
/// one synchronous pass), so a caller can never observe a partially
/// rebuilt marker set.
#[derive(Debug, Default)]
pub struct MarkerSource {
    markers: Vec<Marker>,
}

impl MarkerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all markers.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Adds a single marker on top of the existing set.
    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Replaces the whole marker set: clears, then bulk-inserts.
    pub fn set_markers<I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = Marker>,
    {
        self.markers.clear();
        self.markers.extend(markers);
        log::trace!("marker source rebuilt with {} markers", self.markers.len());
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
