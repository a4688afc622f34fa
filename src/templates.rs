use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{AddMovieForm, EditMovieForm, FieldError},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Movies rated and reviewed, ranked by rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add the first one." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex gap-6" {
                img class="h-36 w-24 flex-none rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);

                div class="min-w-0 flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                        }
                        @if let Some(ranking) = movie.ranking {
                            span class="flex-none rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-800" { "#" (ranking) }
                        }
                    }

                    p class="mt-1 text-sm font-medium text-gray-700" { "Rating: " (movie.rating) }

                    @if let Some(description) = &movie.description {
                        p class="mt-2 text-sm text-gray-600" { (description) }
                    }

                    p class="mt-2 text-sm italic text-gray-700" { "\u{201c}" (movie.review) "\u{201d}" }

                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}

pub fn add_page(form: &AddMovieForm, errors: &[FieldError]) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Every field is required." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            (text_field("title", "Title", &form.title, errors))
                            (text_field("year", "Year", &form.year, errors))
                            (text_field("description", "Description", &form.description, errors))
                            (text_field("rating", "Rating (out of 10)", &form.rating, errors))
                            (text_field("ranking", "Ranking", &form.ranking, errors))
                            (text_field("review", "Your review", &form.review, errors))
                            (text_field("img_url", "Poster URL", &form.img_url, errors))

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, form: &EditMovieForm, errors: &[FieldError]) -> String {
    page(
        "Edit Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "Update your rating and review." }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                            (text_field("rating", "Rating (out of 10)", &form.rating, errors))
                            (text_field("review", "Your review", &form.review, errors))

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Save" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn text_field(name: &str, label: &str, value: &str, errors: &[FieldError]) -> Markup {
    html! {
        div {
            label class=(LABEL_CLASS) for=(name) { (label) }
            input class=(INPUT_CLASS) name=(name) id=(name) value=(value);
            @for error in errors.iter().filter(|e| e.field == name) {
                p class="mt-2 text-sm text-red-600" { (error.message) }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
