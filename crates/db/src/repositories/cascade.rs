//! Ordered cascade deletion helpers.
//!
//! The schema declares plain foreign keys, so dependent rows must be removed
//! children-first. Every helper takes a `PgConnection` and is expected to run
//! inside a transaction opened by the calling repository.

use initrack_core::types::DbId;
use sqlx::PgConnection;

/// Child tables of `initiative`, paired with the column naming the employee
/// who authored the row.
const INITIATIVE_CHILDREN: [(&str, &str); 4] = [
    ("rating", "given_by"),
    ("review", "given_by"),
    ("task_log", "logged_by"),
    ("subscription", "subscribed_by"),
];

/// Delete every child row (ratings, reviews, task logs, subscriptions) of the
/// given initiatives.
pub(crate) async fn delete_initiative_children(
    conn: &mut PgConnection,
    initiative_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if initiative_ids.is_empty() {
        return Ok(());
    }
    for (table, _) in INITIATIVE_CHILDREN {
        let sql = format!("DELETE FROM {table} WHERE initiative_id = ANY($1)");
        sqlx::query(&sql)
            .bind(initiative_ids)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// Delete the given employees and everything that depends on them.
///
/// Removal proceeds children-first:
/// 1. collect the initiatives doomed by the removal -- created or updated by
///    one of the employees, or referencing a status/type row one of them
///    authored;
/// 2. delete child rows sitting on a doomed initiative or authored by one of
///    the employees;
/// 3. delete the doomed initiatives;
/// 4. delete status codes and initiative types the employees authored;
/// 5. delete the employee rows.
///
/// Returns the number of employee rows removed.
pub(crate) async fn delete_employees(
    conn: &mut PgConnection,
    employee_ids: &[DbId],
) -> Result<u64, sqlx::Error> {
    if employee_ids.is_empty() {
        return Ok(0);
    }

    let doomed_initiatives: Vec<DbId> = sqlx::query_scalar(
        "SELECT initiative_id FROM initiative
         WHERE created_by = ANY($1)
            OR updated_by = ANY($1)
            OR status_id IN (
                SELECT status_id FROM status_code
                WHERE created_by = ANY($1) OR updated_by = ANY($1))
            OR initiative_type IN (
                SELECT initiative_type_id FROM initiative_type
                WHERE created_by = ANY($1) OR updated_by = ANY($1))",
    )
    .bind(employee_ids)
    .fetch_all(&mut *conn)
    .await?;

    for (table, owner_column) in INITIATIVE_CHILDREN {
        let sql = format!(
            "DELETE FROM {table} WHERE initiative_id = ANY($1) OR {owner_column} = ANY($2)"
        );
        sqlx::query(&sql)
            .bind(&doomed_initiatives)
            .bind(employee_ids)
            .execute(&mut *conn)
            .await?;
    }

    sqlx::query("DELETE FROM initiative WHERE initiative_id = ANY($1)")
        .bind(&doomed_initiatives)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM status_code WHERE created_by = ANY($1) OR updated_by = ANY($1)")
        .bind(employee_ids)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM initiative_type WHERE created_by = ANY($1) OR updated_by = ANY($1)")
        .bind(employee_ids)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("DELETE FROM employee WHERE employee_id = ANY($1)")
        .bind(employee_ids)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}
