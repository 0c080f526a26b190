// src/models/report.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Produto do catálogo. Só leitura deste lado: quem altera é o cadastro de produtos.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64, // Preço unitário (>= 0)
}

// Relatório de vendas, montado do zero a cada requisição.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub product: Product,
    pub total_sales_past_thirty_days: i64,
    pub daily_sales_past_thirty_days: f64,
    pub gross_income: f64, // price * dailySalesPastThirtyDays
}

impl Report {
    /// Relatório com média diária e receita forçadas a zero.
    pub fn zero_sales(product: Product, total_sales: i64) -> Self {
        Self {
            product,
            total_sales_past_thirty_days: total_sales,
            daily_sales_past_thirty_days: 0.0,
            gross_income: 0.0,
        }
    }

    /// Relatório pela fórmula geral: receita = preço × média diária.
    pub fn from_sales(product: Product, total_sales: i64, daily_sales: f64) -> Self {
        let gross_income = product.price * daily_sales;
        Self {
            product,
            total_sales_past_thirty_days: total_sales,
            daily_sales_past_thirty_days: daily_sales,
            gross_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            id: 2,
            name: "Widget".to_string(),
            description: None,
            price: 5.0,
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let report = Report::from_sales(widget(), 60, 2.0);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            json!({
                "product": { "id": 2, "name": "Widget", "description": null, "price": 5.0 },
                "totalSalesPastThirtyDays": 60,
                "dailySalesPastThirtyDays": 2.0,
                "grossIncome": 10.0
            })
        );
    }

    #[test]
    fn zero_sales_ignores_price() {
        let report = Report::zero_sales(widget(), 0);
        assert_eq!(report.daily_sales_past_thirty_days, 0.0);
        assert_eq!(report.gross_income, 0.0);
    }
}
