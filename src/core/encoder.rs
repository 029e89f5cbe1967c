use crate::core::{barcode, names, rank};
use crate::domain::model::{BatchConversion, ConversionResult};
use crate::utils::error::{BarcodeError, Result};

/// Converts one candidate string into its rank and given name.
pub fn convert(candidate: Option<&str>) -> Result<ConversionResult> {
    let barcode = barcode::parse(candidate).ok_or_else(|| {
        tracing::debug!("Rejected non-barcode candidate: {:?}", candidate);
        BarcodeError::invalid_barcode(candidate)
    })?;

    let rank = rank::rank(&barcode);
    let given_name = names::given_name(rank);

    Ok(ConversionResult {
        barcode_name: barcode.into_string(),
        given_name,
        integer_value: rank,
    })
}

/// Converts every candidate in order, keyed by the original input.
///
/// Stops at the first invalid candidate and returns only that error; results
/// already computed for earlier candidates are discarded.
pub fn convert_batch<I, S>(candidates: I) -> Result<BatchConversion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .try_fold(BatchConversion::new(), |mut batch, candidate| {
            let candidate = candidate.as_ref();
            let result = convert(Some(candidate))?;
            batch.insert(candidate.to_string(), result);
            Ok(batch)
        })
}
