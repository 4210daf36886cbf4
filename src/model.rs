//! Data types for developer performance records.

use serde::Deserialize;

/// A single developer entry deserialized from an input CSV row.
///
/// Fields are matched to CSV columns by header name, so column order in the
/// input file does not matter. Unknown columns are rejected, and the unsigned
/// integer fields reject negative values at parse time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Developer {
    pub name: String,
    /// Grouping key for the performance report (job title/role).
    pub position: String,
    pub completed_tasks: u32,
    pub performance: f64,
    /// Free-text skill list; kept as raw text, commas survive via CSV quoting.
    pub skills: String,
    pub team: String,
    pub experience_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row_by_header_name() {
        let data = "team,name,position,completed_tasks,performance,skills,experience_years\n\
                    API Team,John Doe,Backend Developer,45,4.8,\"Python, Django\",5\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let dev: Developer = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(dev.name, "John Doe");
        assert_eq!(dev.position, "Backend Developer");
        assert_eq!(dev.completed_tasks, 45);
        assert_eq!(dev.performance, 4.8);
        assert_eq!(dev.skills, "Python, Django");
        assert_eq!(dev.team, "API Team");
        assert_eq!(dev.experience_years, 5);
    }

    #[test]
    fn test_negative_task_count_is_rejected() {
        let data = "name,position,completed_tasks,performance,skills,team,experience_years\n\
                    John Doe,Backend Developer,-1,4.8,Python,API Team,5\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let result: Result<Developer, _> = rdr.deserialize().next().unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let data = "name,position,completed_tasks,performance,skills,team,experience_years,salary\n\
                    John Doe,Backend Developer,45,4.8,Python,API Team,5,100\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let result: Result<Developer, _> = rdr.deserialize().next().unwrap();
        assert!(result.is_err());
    }
}
