use pivot_core::stmt::{Attributes, Id, IdEntry, IdsInput, IdsWithAttributes};

/// Extracts identifiers from `input` and maps each one to the attributes to
/// write for it.
///
/// - A record maps its key to `attributes`.
/// - A collection maps every record's key to `attributes`.
/// - A keyed entry with its own attributes maps its identifier to
///   `attributes` merged with the entry's attributes; the entry wins on
///   conflict. A bare identifier entry maps to `attributes`.
/// - A scalar integer or string maps to `attributes`.
///
/// Any other scalar yields an empty result rather than an error. Callers
/// rely on unrecognized input being treated as "no identifiers".
pub fn ids_with_attributes(input: &IdsInput, attributes: &Attributes) -> IdsWithAttributes {
    let mut ret = IdsWithAttributes::new();

    match input {
        IdsInput::Model(model) => {
            ret.insert(model.key(), attributes.clone());
        }
        IdsInput::Collection(models) => {
            for model in models {
                ret.insert(model.key(), attributes.clone());
            }
        }
        IdsInput::Map(entries) => {
            for entry in entries {
                match entry {
                    IdEntry::WithAttributes(id, overrides) => {
                        ret.insert(id.clone(), attributes.merge(overrides));
                    }
                    IdEntry::Id(id) => {
                        ret.insert(id.clone(), attributes.clone());
                    }
                }
            }
        }
        IdsInput::Scalar(value) => {
            if let Some(id) = Id::from_value(value) {
                ret.insert(id, attributes.clone());
            }
        }
    }

    ret
}
