//! Die zentrale Marker-Registry: geordnete Sammlung mit CRUD und Suche.
//!
//! Einfügereihenfolge ist zugleich Anzeige- und Zeichenreihenfolge.
//! Indizes sind immer dicht (`0..count`); Löschen verschiebt alle
//! nachfolgenden Marker um eins nach vorne. Die Oberfläche muss
//! Listen-Zeilen selbst auf Registry-Indizes abbilden, wenn sie filtert.

use super::color_rule::ColorMode;
use super::error::{MarkerError, MarkerResult};
use super::marker::{format_number, Marker, MarkerInput};

/// Geordnete Sammlung aller Marker einer Sitzung
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    color_mode: ColorMode,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry mit festem Farbmodus
    pub fn new(color_mode: ColorMode) -> Self {
        Self {
            markers: Vec::new(),
            color_mode,
        }
    }

    /// Farbmodus, gegen den alle Eingaben validiert werden
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Wechselt den Farbmodus. Nur bei leerer Registry erlaubt.
    pub fn set_color_mode(&mut self, color_mode: ColorMode) -> MarkerResult<()> {
        if !self.markers.is_empty() && color_mode != self.color_mode {
            return Err(MarkerError::Schema(format!(
                "Farbmodus kann bei {} vorhandenen Markern nicht gewechselt werden",
                self.markers.len()
            )));
        }
        self.color_mode = color_mode;
        Ok(())
    }

    /// Anzahl der Marker
    pub fn count(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Read-only Sicht auf alle Marker in Registry-Reihenfolge
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Iteriert über `(index, marker)` in Registry-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Marker)> + '_ {
        self.markers.iter().enumerate()
    }

    /// Validiert eine Eingabe gegen den Farbmodus dieser Registry.
    pub fn validate(&self, input: &MarkerInput) -> MarkerResult<Marker> {
        input.validate(self.color_mode)
    }

    /// Validiert und hängt einen neuen Marker an. Gibt dessen Index zurück.
    pub fn create(&mut self, input: &MarkerInput) -> MarkerResult<usize> {
        let marker = self.validate(input)?;
        self.markers.push(marker);
        Ok(self.markers.len() - 1)
    }

    /// Ersetzt den Marker an `index` vollständig.
    ///
    /// Der Index wird vor der Validierung geprüft; bei jedem Fehler bleibt
    /// die Registry unverändert.
    pub fn update(&mut self, index: usize, input: &MarkerInput) -> MarkerResult<()> {
        self.check_index(index)?;
        let marker = self.validate(input)?;
        self.markers[index] = marker;
        Ok(())
    }

    /// Entfernt den Marker an `index`, nachfolgende rücken nach.
    pub fn delete(&mut self, index: usize) -> MarkerResult<Marker> {
        self.check_index(index)?;
        Ok(self.markers.remove(index))
    }

    /// Liefert den Marker an `index`.
    pub fn get(&self, index: usize) -> MarkerResult<&Marker> {
        self.markers.get(index).ok_or(MarkerError::Index {
            index,
            count: self.markers.len(),
        })
    }

    /// Sucht case-insensitiv in Label, Farbe, Koordinaten und Messwerten.
    ///
    /// Das Ergebnis ist lazy und kann per `clone()` neu gestartet werden.
    /// Eine leere Anfrage liefert alle Marker.
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            markers: &self.markers,
            query: query.to_lowercase(),
            position: 0,
        }
    }

    /// Hängt bereits validierte Marker an (Import).
    pub fn append_all(&mut self, markers: Vec<Marker>) {
        self.markers.extend(markers);
    }

    /// Ersetzt den gesamten Inhalt samt Farbmodus (Projekt laden).
    pub fn replace_all(&mut self, color_mode: ColorMode, markers: Vec<Marker>) {
        self.color_mode = color_mode;
        self.markers = markers;
    }

    /// Entfernt alle Marker, der Farbmodus bleibt.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    fn check_index(&self, index: usize) -> MarkerResult<()> {
        if index < self.markers.len() {
            Ok(())
        } else {
            Err(MarkerError::Index {
                index,
                count: self.markers.len(),
            })
        }
    }
}

/// Lazy Suchergebnis über die Registry, liefert `(index, marker)`.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    markers: &'a [Marker],
    query: String,
    position: usize,
}

impl<'a> Iterator for Search<'a> {
    type Item = (usize, &'a Marker);

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.markers.len() {
            let index = self.position;
            self.position += 1;
            let marker = &self.markers[index];
            if matches_query(marker, &self.query) {
                return Some((index, marker));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.markers.len() - self.position))
    }
}

fn matches_query(marker: &Marker, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if marker.label().to_lowercase().contains(query)
        || marker.color().to_lowercase().contains(query)
        || format_number(marker.latitude()).contains(query)
        || format_number(marker.longitude()).contains(query)
    {
        return true;
    }
    marker.measurements().is_some_and(|m| {
        format_number(m.von).contains(query) || format_number(m.voff).contains(query)
    })
}

#[cfg(test)]
mod tests;
