//! Repository for the `placements` table: CRUD, filtered listing, and the
//! group-by-count aggregations behind the analytics endpoints.

use chrono::NaiveDate;
use clinboard_core::filter::{Dimension, PlacementFilter};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::models::analytics::{DashboardSummary, DateCount, DimensionCount};
use crate::models::placement::{CreatePlacement, Placement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, shift, physician_name, physician_id, department, \
     specialty, status, area, room_number, created_at, updated_at";

/// Provides placement persistence and aggregation.
pub struct PlacementRepo;

impl PlacementRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new placement, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlacement) -> Result<Placement, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements \
                 (date, shift, physician_name, physician_id, department, \
                  specialty, status, area, room_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(input.date)
            .bind(&input.shift)
            .bind(&input.physician_name)
            .bind(input.physician_id)
            .bind(&input.department)
            .bind(&input.specialty)
            .bind(&input.status)
            .bind(&input.area)
            .bind(&input.room_number)
            .fetch_one(pool)
            .await
    }

    /// Find a placement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM placements WHERE id = $1");
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace all fields of a placement (the edit form submits the full
    /// record, so absent fields become NULL). Returns `None` for a
    /// missing id.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        input: &CreatePlacement,
    ) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!(
            "UPDATE placements SET \
                 date = $2, shift = $3, physician_name = $4, physician_id = $5, \
                 department = $6, specialty = $7, status = $8, area = $9, \
                 room_number = $10, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .bind(input.date)
            .bind(&input.shift)
            .bind(&input.physician_name)
            .bind(input.physician_id)
            .bind(&input.department)
            .bind(&input.specialty)
            .bind(&input.status)
            .bind(&input.area)
            .bind(&input.room_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a placement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every placement (replace-mode import). Returns the number of
    /// rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements").execute(pool).await?;
        let deleted = result.rows_affected();
        tracing::info!(deleted, "Cleared placements table for replace-mode import");
        Ok(deleted)
    }

    // -----------------------------------------------------------------------
    // Filtered listing
    // -----------------------------------------------------------------------

    /// List placements matching the filter and optional free-text search,
    /// ordered by date descending then shift, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &PlacementFilter,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Placement>, sqlx::Error> {
        let (where_clause, mut bind_idx) = filter_where(filter, 1);
        let search_clause = search_where(search, &mut bind_idx);

        let query = format!(
            "SELECT {COLUMNS} FROM placements \
             WHERE TRUE{where_clause}{search_clause} \
             ORDER BY date DESC NULLS LAST, shift ASC NULLS LAST, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, Placement>(&query);
        q = bind_filter(q, filter);
        if let Some(pattern) = search_pattern(search) {
            q = q.bind(pattern);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count rows matching the filter and optional search (for pagination).
    pub async fn count_listed(
        pool: &PgPool,
        filter: &PlacementFilter,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, mut bind_idx) = filter_where(filter, 1);
        let search_clause = search_where(search, &mut bind_idx);

        let query = format!(
            "SELECT COUNT(*) AS count FROM placements WHERE TRUE{where_clause}{search_clause}"
        );

        let mut q = sqlx::query_as::<_, (i64,)>(&query);
        q = bind_filter(q, filter);
        if let Some(pattern) = search_pattern(search) {
            q = q.bind(pattern);
        }
        Ok(q.fetch_one(pool).await?.0)
    }

    /// Count rows matching the filter alone.
    pub async fn count(pool: &PgPool, filter: &PlacementFilter) -> Result<i64, sqlx::Error> {
        Self::count_listed(pool, filter, None).await
    }

    // -----------------------------------------------------------------------
    // Aggregations
    // -----------------------------------------------------------------------

    /// Group the filtered set by one dimension, counting rows per group.
    ///
    /// NULL values stay NULL in the result. Department/specialty/status
    /// breakdowns order by count descending (value ascending on ties);
    /// the shift breakdown orders by shift code ascending regardless of
    /// count.
    pub async fn count_by_dimension(
        pool: &PgPool,
        filter: &PlacementFilter,
        dimension: Dimension,
    ) -> Result<Vec<DimensionCount>, sqlx::Error> {
        let column = dimension.column();
        let order = if dimension.order_by_count() {
            "count DESC, value ASC NULLS LAST"
        } else {
            "value ASC NULLS LAST"
        };

        let (where_clause, _) = filter_where(filter, 1);
        let query = format!(
            "SELECT {column} AS value, COUNT(*) AS count \
             FROM placements \
             WHERE TRUE{where_clause} \
             GROUP BY {column} \
             ORDER BY {order}"
        );

        let mut q = sqlx::query_as::<_, DimensionCount>(&query);
        q = bind_filter(q, filter);
        q.fetch_all(pool).await
    }

    /// Per-day counts of exact-date matches within `[start, end]`
    /// (inclusive). Sparse: days without rows are absent; the API layer
    /// densifies the series.
    pub async fn counts_by_date(
        pool: &PgPool,
        filter: &PlacementFilter,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DateCount>, sqlx::Error> {
        // Window bounds take $1/$2; filter placeholders start at $3.
        let (where_clause, _) = filter_where(filter, 3);
        let query = format!(
            "SELECT date, COUNT(*) AS count \
             FROM placements \
             WHERE date IS NOT NULL AND date >= $1 AND date <= $2{where_clause} \
             GROUP BY date \
             ORDER BY date"
        );
        let mut q = sqlx::query_as::<_, DateCount>(&query);
        q = q.bind(start).bind(end);
        q = bind_filter(q, filter);
        q.fetch_all(pool).await
    }

    /// Headline counts for the dashboard home over the filtered set.
    pub async fn summary(
        pool: &PgPool,
        filter: &PlacementFilter,
    ) -> Result<DashboardSummary, sqlx::Error> {
        let (where_clause, _) = filter_where(filter, 1);
        let query = format!(
            "SELECT \
                 COUNT(*) AS total, \
                 COUNT(*) FILTER (WHERE status = 'Full Time') AS full_time, \
                 COUNT(*) FILTER (WHERE status = 'Part Time') AS part_time, \
                 COUNT(DISTINCT physician_id) AS unique_physicians \
             FROM placements \
             WHERE TRUE{where_clause}"
        );

        let mut q = sqlx::query_as::<_, (i64, i64, i64, i64)>(&query);
        q = bind_filter(q, filter);
        let (total, full_time, part_time, unique_physicians) = q.fetch_one(pool).await?;

        Ok(DashboardSummary {
            total_placements: total,
            full_time_placements: full_time,
            part_time_placements: part_time,
            unique_physicians,
        })
    }

    /// Sorted distinct non-null values of a dimension (filter form options).
    pub async fn distinct_values(
        pool: &PgPool,
        dimension: Dimension,
    ) -> Result<Vec<String>, sqlx::Error> {
        let column = dimension.column();
        let query = format!(
            "SELECT DISTINCT {column} FROM placements \
             WHERE {column} IS NOT NULL \
             ORDER BY {column}"
        );
        let rows: Vec<(String,)> = sqlx::query_as(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(|(v,)| v).collect())
    }
}

// ---------------------------------------------------------------------------
// Filter-to-SQL helpers
// ---------------------------------------------------------------------------

/// Render the filter as `AND ...` clauses with placeholders starting at
/// `start_idx`. Returns the clause string and the next free index.
///
/// Clause order must match [`bind_filter`]'s bind order.
fn filter_where(filter: &PlacementFilter, start_idx: u32) -> (String, u32) {
    let mut clauses = String::new();
    let mut idx = start_idx;

    if filter.start_date.is_some() {
        clauses.push_str(&format!(" AND date >= ${idx}"));
        idx += 1;
    }
    if filter.end_date.is_some() {
        clauses.push_str(&format!(" AND date <= ${idx}"));
        idx += 1;
    }
    if filter.department.is_some() {
        clauses.push_str(&format!(" AND department = ${idx}"));
        idx += 1;
    }
    if filter.specialty.is_some() {
        clauses.push_str(&format!(" AND specialty = ${idx}"));
        idx += 1;
    }
    if filter.shift.is_some() {
        clauses.push_str(&format!(" AND shift = ${idx}"));
        idx += 1;
    }
    if filter.status.is_some() {
        clauses.push_str(&format!(" AND status = ${idx}"));
        idx += 1;
    }

    (clauses, idx)
}

/// Bind filter values in the order [`filter_where`] rendered them.
fn bind_filter<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &'q PlacementFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    if let Some(start) = filter.start_date {
        q = q.bind(start);
    }
    if let Some(end) = filter.end_date {
        q = q.bind(end);
    }
    if let Some(ref department) = filter.department {
        q = q.bind(department);
    }
    if let Some(ref specialty) = filter.specialty {
        q = q.bind(specialty);
    }
    if let Some(ref shift) = filter.shift {
        q = q.bind(shift);
    }
    if let Some(ref status) = filter.status {
        q = q.bind(status);
    }
    q
}

/// Render the free-text search clause (one placeholder, reused across the
/// OR'd columns), advancing `bind_idx` if a pattern will be bound.
fn search_where(search: Option<&str>, bind_idx: &mut u32) -> String {
    match search {
        Some(s) if !s.trim().is_empty() => {
            let idx = *bind_idx;
            *bind_idx += 1;
            format!(
                " AND (physician_name ILIKE ${idx} OR department ILIKE ${idx} \
                 OR specialty ILIKE ${idx} OR area ILIKE ${idx})"
            )
        }
        _ => String::new(),
    }
}

/// The ILIKE pattern for a search term, if one applies.
fn search_pattern(search: Option<&str>) -> Option<String> {
    match search {
        Some(s) if !s.trim().is_empty() => Some(super::contains_pattern(s)),
        _ => None,
    }
}
