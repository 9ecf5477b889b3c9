//! Fixed vocabularies the generator draws from.

/// Crops a generated producer may plant.
pub const CROP_VOCABULARY: [&str; 5] = ["Soja", "Milho", "Café", "Algodão", "Cana-de-Açúcar"];

/// The 27 Brazilian federative unit codes.
pub const STATE_CODES: [&str; 27] = [
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];
