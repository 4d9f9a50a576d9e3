//! country-search-wasm — WebAssembly bindings for country-search-core
//!
//! This crate exposes the typeahead engine to JavaScript. The page owns the
//! network: it fetches the restcountries list and hands the body to
//! [`CountrySearch::load_json`]. From then on every keystroke goes through
//! [`CountrySearch::update`], which returns the suggestion names and the
//! display records computed from one pass over the data.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountrySearch, restCountriesUrl } from 'country-search-wasm';
//!
//! async function main() {
//!   await init();
//!   const search = new CountrySearch();
//!   try {
//!     const res = await fetch(restCountriesUrl());
//!     if (!res.ok) throw new Error('Request failed with status ' + res.status);
//!     search.loadJson(await res.text());
//!   } catch (e) {
//!     search.loadFailed(String(e));
//!   }
//!
//!   input.addEventListener('input', (ev) => {
//!     const { suggestions, display } = search.update(ev.target.value);
//!     renderDatalist(suggestions);
//!     renderCards(display);
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Until a load succeeds the instance searches an empty list.
//! - A failed load keeps whatever was loaded before; `error()` then returns
//!   the message to show.
use country_search_core::loader::json::parse_records_str;
use country_search_core::{
    CountryRecord, RecordSet, SearchSession, SearchView, REST_COUNTRIES_URL,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing country-search WASM module...".into());
}

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// What one keystroke produces.
#[derive(Serialize)]
struct Update<'a> {
    suggestions: Vec<&'a str>,
    display: &'a [&'a CountryRecord],
}

impl<'a> Update<'a> {
    fn from_view(view: &'a SearchView<'a>) -> Self {
        Self {
            suggestions: view.suggestion_names(),
            display: view.display(),
        }
    }
}

/* --------------------------------------------------------------------------
   Session
-------------------------------------------------------------------------- */

#[wasm_bindgen]
#[derive(Default)]
pub struct CountrySearch {
    session: SearchSession,
}

#[wasm_bindgen]
impl CountrySearch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CountrySearch {
        Self::default()
    }

    /// Install the records from a restcountries response body.
    /// Returns the number of countries; throws if the body does not parse.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, json: &str) -> Result<usize, JsValue> {
        self.try_load_json(json).map_err(js_error)
    }

    /// Install records already shaped as `{ name, capital, population, area, flag }`.
    #[wasm_bindgen(js_name = loadRecords)]
    pub fn load_records(&mut self, records: JsValue) -> Result<usize, JsValue> {
        let records: Vec<CountryRecord> =
            from_value(records).map_err(|e| js_error(e.to_string()))?;
        self.session.load(Ok(RecordSet::new(records)));
        Ok(self.session.records().len())
    }

    /// Report a failure of the page's own fetch.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, reason: &str) {
        self.session.load_failed(reason);
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str) {
        self.session.set_query(query);
    }

    pub fn query(&self) -> String {
        self.session.query().to_owned()
    }

    /// Up to eight names for the datalist. Use `update` when the cards are
    /// needed too; it filters once for both.
    pub fn suggestions(&self) -> Vec<String> {
        self.session
            .suggestions()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Every matching record, for the cards. Filters on each call.
    pub fn display(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.display()).map_err(|e| js_error(e.to_string()))
    }

    /// Set the query and return `{ suggestions, display }` in one call.
    pub fn update(&mut self, query: &str) -> Result<JsValue, JsValue> {
        self.session.set_query(query);
        let view = self.session.view();
        to_value(&Update::from_view(&view)).map_err(|e| js_error(e.to_string()))
    }

    /// Number of loaded countries.
    pub fn count(&self) -> usize {
        self.session.records().len()
    }

    /// Number of countries matching the current query.
    #[wasm_bindgen(js_name = matchCount)]
    pub fn match_count(&self) -> usize {
        self.session.view().len()
    }

    /// Message to show after a failed load.
    pub fn error(&self) -> Option<String> {
        self.session.error().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }
}

impl CountrySearch {
    /// [`CountrySearch::load_json`] without the JS error wrapper.
    pub fn try_load_json(&mut self, json: &str) -> Result<usize, String> {
        let outcome = parse_records_str(json);
        let failure = outcome.as_ref().err().map(|e| e.to_string());
        self.session.load(outcome);

        match failure {
            Some(message) => {
                console_log(&format!("✗ country data rejected: {message}"));
                Err(message)
            }
            None => {
                let count = self.session.records().len();
                console_log(&format!("✓ Loaded {count} countries"));
                Ok(count)
            }
        }
    }
}

/* --------------------------------------------------------------------------
   Stateless helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen(js_name = restCountriesUrl)]
pub fn rest_countries_url() -> String {
    REST_COUNTRIES_URL.to_owned()
}

#[wasm_bindgen(js_name = filterCountries)]
pub fn filter_countries(records: JsValue, query: &str) -> Result<JsValue, JsValue> {
    let records: Vec<CountryRecord> = from_value(records).map_err(|e| js_error(e.to_string()))?;
    to_value(&country_search_core::filter(&records, query)).map_err(|e| js_error(e.to_string()))
}

/// Suggested names (at most eight) for a plain array of records.
#[wasm_bindgen(js_name = suggestCountries)]
pub fn suggest_countries(records: JsValue, query: &str) -> Result<Vec<String>, JsValue> {
    let records: Vec<CountryRecord> = from_value(records).map_err(|e| js_error(e.to_string()))?;
    Ok(country_search_core::suggest(&records, query)
        .into_iter()
        .map(|r| r.name().to_owned())
        .collect())
}

#[cfg(target_arch = "wasm32")]
fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_message: &str) {}
