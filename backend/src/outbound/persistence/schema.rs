//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; `diesel print-schema` against a
//! migrated database regenerates it.

diesel::table! {
    /// Registered farm producers.
    ///
    /// `document_number` carries a unique constraint and the table checks
    /// `farmable_area + vegetation_area <= total_area`.
    producers (id) {
        /// `BIGSERIAL` primary key; values are never reused.
        id -> Int8,
        /// Digits-only CPF (11) or CNPJ (14).
        document_number -> Varchar,
        producer_name -> Varchar,
        farm_name -> Varchar,
        city -> Varchar,
        /// Uppercase two-letter state code.
        state -> Varchar,
        total_area -> Float8,
        farmable_area -> Float8,
        vegetation_area -> Float8,
        crops -> Array<Text>,
    }
}
