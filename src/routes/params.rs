/// Raw query-string state of a category shelf. Values stay unparsed
/// strings; the listing filter owns their interpretation.
#[derive(Debug, Default, Clone)]
pub struct ListingParams {
    pub max_price: Option<String>,
    pub finishes: Vec<String>,
    pub in_stock_only: Option<String>,
    pub sort: Option<String>,
}

impl ListingParams {
    /// Collect shelf params from raw query pairs. `finish` repeats and
    /// accumulates; for the other keys the first occurrence wins.
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "maxPrice" => {
                    if params.max_price.is_none() {
                        params.max_price = Some(value.clone());
                    }
                }
                "finish" => params.finishes.push(value.clone()),
                "inStockOnly" => {
                    if params.in_stock_only.is_none() {
                        params.in_stock_only = Some(value.clone());
                    }
                }
                "sort" => {
                    if params.sort.is_none() {
                        params.sort = Some(value.clone());
                    }
                }
                _ => {}
            }
        }
        params
    }
}
