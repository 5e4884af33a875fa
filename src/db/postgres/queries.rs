//! `information_schema` queries used by the PostgreSQL catalog reader.
//!
//! Identifier columns are cast to `text` because `information_schema`
//! exposes them through domains the client cannot decode directly.

/// Tables (and views) of a schema, in catalog order.
pub const LIST_TABLES: &str = "\
SELECT table_name::text
FROM information_schema.tables
WHERE table_schema = $1";

pub const TABLE_EXISTS: &str = "\
SELECT 1
FROM information_schema.tables
WHERE table_schema = $1 AND table_name = $2";

/// Array columns report `array` so they map to the array type rather than
/// to whatever their element type name would match.
pub const LIST_COLUMNS: &str = "\
SELECT column_name::text,
       CASE WHEN data_type = 'ARRAY' THEN 'array' ELSE udt_name::text END,
       column_default::text
FROM information_schema.columns
WHERE table_schema = $1 AND table_name = $2
ORDER BY ordinal_position";

/// Each referencing column is paired with the referenced key column at the
/// same position within the constraint.
pub const LIST_FOREIGN_KEYS: &str = "\
SELECT kcu.constraint_name::text,
       kcu.table_name::text,
       kcu.column_name::text,
       ref.table_name::text,
       ref.column_name::text
FROM information_schema.key_column_usage kcu
JOIN information_schema.referential_constraints rc
  ON rc.constraint_schema = kcu.constraint_schema
 AND rc.constraint_name = kcu.constraint_name
JOIN information_schema.key_column_usage ref
  ON ref.constraint_schema = rc.unique_constraint_schema
 AND ref.constraint_name = rc.unique_constraint_name
 AND ref.ordinal_position = kcu.position_in_unique_constraint
WHERE kcu.table_schema = $1
  AND kcu.table_name = $2
  AND kcu.column_name = $3
ORDER BY kcu.ordinal_position, kcu.constraint_name";
