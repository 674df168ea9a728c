use serde::de::DeserializeOwned;

use super::API_ROOT;
use crate::client::Client;
use crate::error::ApiError;
use crate::options::ReportOption;
use crate::query::compose;
use crate::transport::Transport;
use crate::types::{ChannelSummaryReport, ResponseTimeReport, StaffReport, TagsReport, VolumeReport};

impl<T: Transport> Client<T> {
    pub fn get_report_volume(&self, options: &[ReportOption]) -> Result<VolumeReport, ApiError> {
        self.report("volume", options)
    }

    pub fn get_report_response_time(&self, options: &[ReportOption]) -> Result<ResponseTimeReport, ApiError> {
        self.report("response_time", options)
    }

    pub fn get_report_staff(&self, options: &[ReportOption]) -> Result<StaffReport, ApiError> {
        self.report("staff", options)
    }

    pub fn get_report_tags(&self, options: &[ReportOption]) -> Result<TagsReport, ApiError> {
        self.report("tags", options)
    }

    pub fn get_report_channel_summary(
        &self,
        options: &[ReportOption],
    ) -> Result<ChannelSummaryReport, ApiError> {
        self.report("channel_summary", options)
    }

    fn report<R: DeserializeOwned>(&self, metric: &str, options: &[ReportOption]) -> Result<R, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/reports/{metric}{query}"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::options::ReportOption;
    use crate::stub::{client, StubTransport};

    #[test]
    fn each_report_hits_its_metric_path() {
        let stub = StubTransport::ok("{}");
        let client = client(&stub);
        client.get_report_volume(&[]).unwrap();
        client.get_report_response_time(&[]).unwrap();
        client.get_report_staff(&[]).unwrap();
        client.get_report_tags(&[]).unwrap();
        client.get_report_channel_summary(&[]).unwrap();

        let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://dummy.reamaze.io/api/v1/reports/volume",
                "https://dummy.reamaze.io/api/v1/reports/response_time",
                "https://dummy.reamaze.io/api/v1/reports/staff",
                "https://dummy.reamaze.io/api/v1/reports/tags",
                "https://dummy.reamaze.io/api/v1/reports/channel_summary",
            ]
        );
    }

    #[test]
    fn report_range_is_rendered_as_query() {
        let stub = StubTransport::ok(
            r#"{"tags":{"vip":3},"start_date":"2024-01-01","end_date":"2024-01-31"}"#,
        );
        let report = client(&stub)
            .get_report_tags(&[
                ReportOption::start_date(2024, 1, 1),
                ReportOption::end_date(2024, 1, 31),
            ])
            .unwrap();
        assert_eq!(report.tags["vip"], 3);
        assert_eq!(report.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(
            stub.last_request().url,
            "https://dummy.reamaze.io/api/v1/reports/tags?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn report_errors_propagate() {
        let stub = StubTransport::with_status(500, "{}");
        let err = client(&stub).get_report_volume(&[]).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
