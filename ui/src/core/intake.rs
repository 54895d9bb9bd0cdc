//! Image intake: the three photo slots and how file bytes land in them.

use api::EncodedImage;

/// The three required views, in display and transmission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Frontal,
    Lateral,
    Oblique,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::Frontal, SlotKind::Lateral, SlotKind::Oblique];

    /// Stable identifier for element ids and CSS modifiers.
    pub fn id(self) -> &'static str {
        match self {
            SlotKind::Frontal => "frontal",
            SlotKind::Lateral => "lateral",
            SlotKind::Oblique => "oblique",
        }
    }

    pub fn label(self) -> String {
        match self {
            SlotKind::Frontal => crate::t!("slot-frontal"),
            SlotKind::Lateral => crate::t!("slot-lateral"),
            SlotKind::Oblique => crate::t!("slot-oblique"),
        }
    }

    pub fn hint(self) -> String {
        match self {
            SlotKind::Frontal => crate::t!("slot-frontal-hint"),
            SlotKind::Lateral => crate::t!("slot-lateral-hint"),
            SlotKind::Oblique => crate::t!("slot-oblique-hint"),
        }
    }
}

/// One optional image per view. Values are replaced, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSlots {
    frontal: Option<EncodedImage>,
    lateral: Option<EncodedImage>,
    oblique: Option<EncodedImage>,
}

impl UploadSlots {
    pub fn get(&self, kind: SlotKind) -> Option<&EncodedImage> {
        match kind {
            SlotKind::Frontal => self.frontal.as_ref(),
            SlotKind::Lateral => self.lateral.as_ref(),
            SlotKind::Oblique => self.oblique.as_ref(),
        }
    }

    pub fn set(&mut self, kind: SlotKind, image: EncodedImage) {
        let slot = match kind {
            SlotKind::Frontal => &mut self.frontal,
            SlotKind::Lateral => &mut self.lateral,
            SlotKind::Oblique => &mut self.oblique,
        };
        *slot = Some(image);
    }

    pub fn filled(&self) -> usize {
        SlotKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_some())
            .count()
    }

    /// Submission is possible only with all three views present.
    pub fn is_complete(&self) -> bool {
        self.filled() == SlotKind::ALL.len()
    }

    pub fn submission(&self) -> Option<SubmittedImages> {
        Some(SubmittedImages {
            frontal: self.frontal.clone()?,
            lateral: self.lateral.clone()?,
            oblique: self.oblique.clone()?,
        })
    }
}

/// The three images handed to the analysis client and, later, to the report.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedImages {
    pub frontal: EncodedImage,
    pub lateral: EncodedImage,
    pub oblique: EncodedImage,
}

impl SubmittedImages {
    pub fn get(&self, kind: SlotKind) -> &EncodedImage {
        match kind {
            SlotKind::Frontal => &self.frontal,
            SlotKind::Lateral => &self.lateral,
            SlotKind::Oblique => &self.oblique,
        }
    }
}

/// Encode `bytes` into `kind`'s slot. Empty selections leave the slot untouched.
pub fn capture_image(slots: &mut UploadSlots, kind: SlotKind, bytes: &[u8]) -> Option<EncodedImage> {
    let Some(image) = EncodedImage::from_bytes(bytes) else {
        tracing::debug!(target: "facelab.intake", slot = kind.id(), "ignoring empty selection");
        return None;
    };
    tracing::debug!(target: "facelab.intake", slot = kind.id(), bytes = bytes.len(), "captured image");
    slots.set(kind, image.clone());
    Some(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slots_are_not_complete() {
        let slots = UploadSlots::default();
        assert_eq!(slots.filled(), 0);
        assert!(!slots.is_complete());
        assert!(slots.submission().is_none());
    }

    #[test]
    fn two_of_three_is_not_complete() {
        let mut slots = UploadSlots::default();
        capture_image(&mut slots, SlotKind::Frontal, b"front");
        capture_image(&mut slots, SlotKind::Oblique, b"angle");
        assert_eq!(slots.filled(), 2);
        assert!(!slots.is_complete());
        assert!(slots.submission().is_none());
    }

    #[test]
    fn all_three_complete_in_order() {
        let mut slots = UploadSlots::default();
        let inputs: [&[u8]; 3] = [b"one", b"two", b"three"];
        for (kind, bytes) in SlotKind::ALL.iter().zip(inputs) {
            capture_image(&mut slots, *kind, bytes);
        }
        assert!(slots.is_complete());
        let submitted = slots.submission().unwrap();
        assert_eq!(Some(&submitted.frontal), slots.get(SlotKind::Frontal));
        assert_eq!(Some(&submitted.lateral), slots.get(SlotKind::Lateral));
        assert_eq!(Some(&submitted.oblique), slots.get(SlotKind::Oblique));
    }

    #[test]
    fn recapture_replaces_only_that_slot() {
        let mut slots = UploadSlots::default();
        capture_image(&mut slots, SlotKind::Frontal, b"first");
        capture_image(&mut slots, SlotKind::Lateral, b"side");
        let side_before = slots.get(SlotKind::Lateral).cloned();

        let replaced = capture_image(&mut slots, SlotKind::Frontal, b"second").unwrap();
        assert_eq!(slots.get(SlotKind::Frontal), Some(&replaced));
        assert_eq!(slots.get(SlotKind::Lateral).cloned(), side_before);
        assert!(slots.get(SlotKind::Oblique).is_none());
    }

    #[test]
    fn empty_selection_is_ignored() {
        let mut slots = UploadSlots::default();
        let kept = capture_image(&mut slots, SlotKind::Lateral, b"side").unwrap();
        assert!(capture_image(&mut slots, SlotKind::Lateral, &[]).is_none());
        assert_eq!(slots.get(SlotKind::Lateral), Some(&kept));
    }
}
