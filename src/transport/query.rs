use crate::domain::{PageRequest, Parameters};

/// Internal parameter name and the query key the provider expects for it.
pub type QueryField = (&'static str, &'static str);

pub const TOP_KEY: &str = "top";
pub const SKIP_KEY: &str = "skip";

/// Query pairs for every present parameter, in table order.
pub(crate) fn encode_query<P: Parameters + ?Sized>(
    params: &P,
    fields: &[QueryField],
) -> Vec<(String, String)> {
    fields
        .iter()
        .filter_map(|(name, wire)| params.get(name).map(|value| ((*wire).to_owned(), value)))
        .collect()
}

/// Append the paging window after the filters.
pub(crate) fn push_page(params: &mut Vec<(String, String)>, page: PageRequest) {
    if let Some(top) = page.top {
        params.push((TOP_KEY.to_owned(), top.to_string()));
    }
    if let Some(skip) = page.skip {
        params.push((SKIP_KEY.to_owned(), skip.to_string()));
    }
}
