use serde::Deserialize;

/// Mutable columns of a movie row, as accepted on create and update.
/// Every column is nullable, so an absent field simply stores NULL.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub length: Option<i32>,
    pub director: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub category: Option<String>,
    pub discount: Option<bool>,
    pub female_director: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub category: Option<String>,
    pub year: Option<i32>,
    pub discount: Option<bool>,
    pub female_director: Option<bool>,
}
