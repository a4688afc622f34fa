use std::str::FromStr;

use serde::Deserialize;

const REQUIRED: &str = "This field is required.";

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: Option<String>,
    pub rating: f64,
    pub ranking: Option<i32>,
    pub review: String,
    pub img_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddMovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub ranking: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub img_url: String,
}

impl AddMovieForm {
    pub fn validate(&self) -> Result<NewMovie, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = required_text("title", &self.title, &mut errors);
        let year =
            required_number::<i32>("year", &self.year, "Must be a whole number.", &mut errors);
        let description = required_text("description", &self.description, &mut errors);
        let rating =
            required_number::<f64>("rating", &self.rating, "Must be a number.", &mut errors);
        let ranking =
            required_number::<i32>("ranking", &self.ranking, "Must be a whole number.", &mut errors);
        let review = required_text("review", &self.review, &mut errors);
        let img_url = required_text("img_url", &self.img_url, &mut errors);

        match (title, year, description, rating, ranking, review, img_url) {
            (
                Some(title),
                Some(year),
                Some(description),
                Some(rating),
                Some(ranking),
                Some(review),
                Some(img_url),
            ) => Ok(NewMovie {
                title,
                year,
                description: Some(description),
                rating,
                ranking: Some(ranking),
                review,
                img_url,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EditMovieForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Clone, Debug)]
pub struct ReviewUpdate {
    pub rating: f64,
    pub review: String,
}

impl EditMovieForm {
    pub fn validate(&self) -> Result<ReviewUpdate, Vec<FieldError>> {
        let mut errors = Vec::new();

        let rating =
            required_number::<f64>("rating", &self.rating, "Must be a number.", &mut errors);
        let review = required_text("review", &self.review, &mut errors);

        match (rating, review) {
            (Some(rating), Some(review)) => Ok(ReviewUpdate { rating, review }),
            _ => Err(errors),
        }
    }
}

fn required_text(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError { field, message: REQUIRED });
        return None;
    }
    Some(value.to_string())
}

fn required_number<T: FromStr>(
    field: &'static str,
    value: &str,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError { field, message: REQUIRED });
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError { field, message });
            None
        }
    }
}
