use serde_json::Value;

use super::LookupResult;

/// Rewrites `connection.isp` of a successful mainland-China result into the
/// carrier's common name. Anything else is left untouched.
pub fn normalize_isp(result: &mut LookupResult) {
    let is_cn = result.get("success").and_then(Value::as_bool) == Some(true)
        && result.get("country_code").and_then(Value::as_str) == Some("CN");
    if !is_cn {
        return;
    }
    let Some(Value::Object(connection)) = result.get_mut("connection") else {
        return;
    };

    let raw_isp = connection.get("isp").and_then(Value::as_str);
    let raw_org = connection.get("org").and_then(Value::as_str);
    if let Some(isp) = canonical_isp(raw_isp, raw_org) {
        connection.insert("isp".to_string(), Value::String(isp));
    }
}

fn canonical_isp(raw_isp: Option<&str>, raw_org: Option<&str>) -> Option<String> {
    let isp = raw_isp.unwrap_or_default().to_lowercase();
    let org = raw_org.unwrap_or_default().to_lowercase();
    let either = |needle: &str| isp.contains(needle) || org.contains(needle);

    let carrier = if isp.contains("telecom") || either("chinanet") {
        "中国电信"
    } else if either("unicom") {
        "中国联通"
    } else if either("mobile") {
        "中国移动"
    } else if either("broadnet") || either("cbn") {
        "中国广电"
    } else if isp.contains("tie通") || either("dr.peng") {
        "长城宽带/鹏博士"
    } else if either("education") || isp.contains("cernet") {
        "教育网"
    } else if ["street", "road", "no."].iter().any(|s| isp.contains(s)) {
        // registry address leaked into the isp field
        return raw_org
            .filter(|org| !org.is_empty())
            .or(raw_isp)
            .map(str::to_string);
    } else {
        return None;
    };
    Some(carrier.to_string())
}
