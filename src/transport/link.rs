use chrono::NaiveDate;

use crate::domain::{CreateLink, FullLink, LinkStatus};

pub fn encode_create_link_form(request: &CreateLink) -> Vec<(String, String)> {
    let mut params = vec![(
        format!("data[{}]", FullLink::FIELD),
        request.full_link.as_str().to_owned(),
    )];

    if request.status != LinkStatus::default() {
        params.push(("data[status]".to_owned(), request.status.code().to_string()));
    }
    if let Some(date) = request.expiration_date.filter(|date| *date > unix_epoch()) {
        params.push((
            "data[expirationDate]".to_owned(),
            date.format("%Y-%m-%d").to_string(),
        ));
    }
    if let Some(comment) = request.comment.as_deref().filter(|c| !c.is_empty()) {
        params.push(("data[comment]".to_owned(), comment.to_owned()));
    }

    params
}

// `NaiveDate::default()` is 1970-01-01.
fn unix_epoch() -> NaiveDate {
    NaiveDate::default()
}

pub fn encode_link_id_form(link_id: u64) -> Vec<(String, String)> {
    vec![("id".to_owned(), link_id.to_string())]
}

pub fn encode_delete_link_form(link_id: u64) -> Vec<(String, String)> {
    vec![("ids[0]".to_owned(), link_id.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> CreateLink {
        CreateLink::new(FullLink::new("https://shop.example.com/sale").unwrap())
    }

    #[test]
    fn create_link_with_defaults_sends_full_link_only() {
        assert_eq!(
            encode_create_link_form(&link()),
            vec![(
                "data[fullLink]".to_owned(),
                "https://shop.example.com/sale".to_owned()
            )]
        );
    }

    #[test]
    fn create_link_formats_expiration_date_and_status() {
        let request = CreateLink {
            status: LinkStatus::Inactive,
            expiration_date: NaiveDate::from_ymd_opt(2026, 1, 9),
            comment: Some("winter".to_owned()),
            ..link()
        };
        let params = encode_create_link_form(&request);
        assert_eq!(
            params[1..],
            [
                ("data[status]".to_owned(), "0".to_owned()),
                ("data[expirationDate]".to_owned(), "2026-01-09".to_owned()),
                ("data[comment]".to_owned(), "winter".to_owned()),
            ]
        );
    }

    #[test]
    fn epoch_expiration_date_counts_as_unset() {
        let request = CreateLink {
            expiration_date: Some(unix_epoch()),
            comment: Some(String::new()),
            ..link()
        };
        assert_eq!(encode_create_link_form(&request).len(), 1);
    }

    #[test]
    fn delete_uses_indexed_ids_field() {
        assert_eq!(
            encode_delete_link_form(12),
            vec![("ids[0]".to_owned(), "12".to_owned())]
        );
        assert_eq!(
            encode_link_id_form(12),
            vec![("id".to_owned(), "12".to_owned())]
        );
    }
}
