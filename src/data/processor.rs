//! Data Processor Module
//! Whole-frame cleaning: closure filtering, column pruning and field
//! normalization via the `clean` parsers.

use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::clean::{
    build_location, opening_days, parse_coordinates, schedule_from_json,
    title_case_with_exceptions, Coordinates,
};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Raw columns that carry no value in the cleaned dataset.
const DROP_COLUMNS: &[&str] = &[
    "place_id",
    "description",
    "is_spending_on_ads",
    "reviews",
    "rating",
    "competitors",
    "website",
    "phone",
    "can_claim",
    "owner",
    "owner_posts",
    "featured_image",
    "main_category",
    "categories",
    "status",
    "is_temporarily_closed",
    "is_permanently_closed",
    "price_range",
    "reviews_per_rating",
    "reviews_link",
    "plus_code",
    "detailed_address",
    "time_zone",
    "cid",
    "data_id",
    "kgmid",
    "about",
    "most_popular_times",
    "popular_times",
    "menu",
    "reservations",
    "order_online_links",
    "image_count",
    "images",
    "featured_images",
    "on_site_places",
    "customer_updates",
    "featured_question",
    "review_keywords",
    "featured_reviews",
    "detailed_reviews",
    "query",
];

/// Flags consulted before rows are dropped; truthy means the listing is gone.
const CLOSURE_FLAGS: &[&str] = &["is_temporarily_closed", "is_permanently_closed"];

/// Handles the full cleaning pass over the merged frame.
pub struct DataProcessor;

impl DataProcessor {
    /// Run every cleaning stage in order and return the output frame.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut df = Self::filter_open(df)?;
        df = Self::drop_raw_columns(df);
        Self::rename_columns(&mut df)?;
        Self::normalize_text_columns(&mut df)?;
        Self::resolve_opening_days(&mut df)?;
        Self::build_location_column(&mut df)?;
        Self::build_schedule_column(&mut df)?;
        Ok(df)
    }

    /// Drop rows whose closure flags carry a truthy value.
    fn filter_open(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut df = df.clone();
        let before = df.height();

        for flag in CLOSURE_FLAGS {
            if !Self::has_column(&df, flag) {
                continue;
            }
            let mask: Vec<bool> = {
                let col = df.column(flag)?.cast(&DataType::String)?;
                col.str()?
                    .into_iter()
                    .map(|value| !Self::is_truthy_flag(value))
                    .collect()
            };
            df = df.filter(&BooleanChunked::from_slice("mask".into(), &mask))?;
        }

        info!(
            dropped = before - df.height(),
            kept = df.height(),
            "filtered closed listings"
        );
        Ok(df)
    }

    // Exports encode "not closed" inconsistently: missing cell, empty
    // string, "false", "0", "nan" or "none".
    fn is_truthy_flag(value: Option<&str>) -> bool {
        let Some(value) = value else { return false };
        !matches!(
            value.trim().to_lowercase().as_str(),
            "" | "false" | "0" | "nan" | "none"
        )
    }

    fn drop_raw_columns(mut df: DataFrame) -> DataFrame {
        let mut removed = 0usize;
        for name in DROP_COLUMNS {
            if let Ok(dropped) = df.drop(name) {
                df = dropped;
                removed += 1;
            }
        }
        debug!(removed, "dropped raw columns");
        df
    }

    fn rename_columns(df: &mut DataFrame) -> Result<(), ProcessorError> {
        for (from, to) in [("link", "gmaps_link"), ("workday_timing", "opening_hour")] {
            if Self::has_column(df, from) {
                df.rename(from, to.into())?;
            }
        }
        Ok(())
    }

    /// Title-case the name and address columns in place; nulls stay null.
    fn normalize_text_columns(df: &mut DataFrame) -> Result<(), ProcessorError> {
        for name in ["name", "address"] {
            if !Self::has_column(df, name) {
                continue;
            }
            let values: Vec<Option<String>> = {
                let col = df.column(name)?.cast(&DataType::String)?;
                col.str()?
                    .into_iter()
                    .map(|value| value.map(title_case_with_exceptions))
                    .collect()
            };
            df.with_column(Column::new(name.into(), values))?;
        }
        Ok(())
    }

    /// Replace `closed_on` with an `opening_day` JSON array of abbreviations.
    fn resolve_opening_days(df: &mut DataFrame) -> Result<(), ProcessorError> {
        if !Self::has_column(df, "closed_on") {
            return Ok(());
        }
        let cells: Vec<String> = {
            let col = df.column("closed_on")?.cast(&DataType::String)?;
            let mut cells = Vec::with_capacity(df.height());
            for value in col.str()?.into_iter() {
                let days = opening_days(value.unwrap_or(""));
                cells.push(serde_json::to_string(&days)?);
            }
            cells
        };
        df.with_column(Column::new("opening_day".into(), cells))?;
        let dropped = df.drop("closed_on")?;
        *df = dropped;
        info!("resolved closed_on into opening_day");
        Ok(())
    }

    /// Merge `coordinates` and `gmaps_link` into a `location` JSON column.
    fn build_location_column(df: &mut DataFrame) -> Result<(), ProcessorError> {
        if !Self::has_column(df, "coordinates") {
            return Ok(());
        }

        let coords: Vec<Option<Coordinates>> = {
            let col = df.column("coordinates")?.cast(&DataType::String)?;
            col.str()?
                .into_iter()
                .map(|value| value.and_then(parse_coordinates))
                .collect()
        };

        if Self::has_column(df, "gmaps_link") {
            let links: Vec<Option<String>> = {
                let col = df.column("gmaps_link")?.cast(&DataType::String)?;
                col.str()?
                    .into_iter()
                    .map(|value| value.map(|s| s.to_string()))
                    .collect()
            };

            let mut cells = Vec::with_capacity(coords.len());
            for (coord, link) in coords.iter().copied().zip(&links) {
                let location = build_location(
                    coord.map(|c| c.latitude),
                    coord.map(|c| c.longitude),
                    link.as_deref(),
                );
                cells.push(serde_json::to_string(&location)?);
            }
            df.with_column(Column::new("location".into(), cells))?;
            info!("merged coordinates and gmaps_link into location");
        }

        let dropped = df.drop("coordinates")?;
        *df = dropped;
        Ok(())
    }

    /// Replace the raw `hours` column with the structured `schedule` column.
    fn build_schedule_column(df: &mut DataFrame) -> Result<(), ProcessorError> {
        if !Self::has_column(df, "hours") {
            return Ok(());
        }
        let cells: Vec<String> = {
            let col = df.column("hours")?.cast(&DataType::String)?;
            let mut cells = Vec::with_capacity(df.height());
            for value in col.str()?.into_iter() {
                let schedule = schedule_from_json(value.unwrap_or(""));
                cells.push(serde_json::to_string(&schedule)?);
            }
            cells
        };
        df.with_column(Column::new("schedule".into(), cells))?;
        let dropped = df.drop("hours")?;
        *df = dropped;
        info!("transformed hours into schedule");
        Ok(())
    }

    fn has_column(df: &DataFrame, name: &str) -> bool {
        df.get_column_names().iter().any(|c| c.as_str() == name)
    }
}
