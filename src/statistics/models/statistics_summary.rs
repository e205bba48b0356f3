use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryData {
    pub income: Vec<CategoryValue>,
    pub expense: Vec<CategoryValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateData {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub category_data: CategoryData,
    pub date_data: Vec<DateData>,
    pub count: usize,
}
