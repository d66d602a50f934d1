//! Curated non-standard status codes.
//!
//! Hand-maintained vendor and extension codes that the IANA registry
//! does not document. Each carries its own documentation lines with
//! pre-rendered references; when a code is also registered (418), the
//! curated case replaces the registry entry during the merge.

use teapot_core::{link, see_also};

use crate::{case::Case, error::Result, overrides::NameOverrides};

/// Name substitutions for codes the registry lists under unhelpful names.
pub fn name_overrides() -> NameOverrides {
    let mut overrides = NameOverrides::new();
    // Registered as "(Unused)"; the historical name is the useful one.
    overrides.insert(306, "Switch Proxy");
    overrides
}

/// The curated extension cases, in declaration order (the merge sorts).
pub fn curated_cases() -> Result<Vec<Case>> {
    Ok(vec![
        // RFC
        Case::new(
            418,
            "I'm A Teapot",
            [
                "Returned by tea pots requested to brew coffee".to_string(),
                String::new(),
                see_also(Some("RFC 2324"), "http://www.iana.org/go/rfc2324"),
            ],
        )?,
        // IIS
        Case::new(
            440,
            "IIS Login Timeout",
            [
                "The client's session has expired and must log in again.".to_string(),
                String::new(),
                "**Category**: Internet Information Services".to_string(),
                String::new(),
                see_also(
                    Some(
                        "Error message when you try to log on to Exchange 2007 by using Outlook Web Access: \"440 Login Timeout\"",
                    ),
                    "http://support.microsoft.com/kb/941201/en-us",
                ),
            ],
        )?,
        Case::new(
            449,
            "IIS Retry With",
            [
                "The server cannot honour the request because the user has not provided the required information.".to_string(),
                String::new(),
                "**Category**: Internet Information Services".to_string(),
                String::new(),
                see_also(
                    Some("2.2.6 449 Retry With Status Code"),
                    "https://msdn.microsoft.com/en-us/library/dd891478.aspx",
                ),
            ],
        )?,
        // nginx
        Case::new(
            444,
            "nginx No Response",
            [
                "Used to indicate that the server has returned no information to the client and closed the connection.",
                "",
                "**Category**: nginx",
            ],
        )?,
        Case::new(
            495,
            "nginx SSL Certificate Error",
            [
                "An expansion of the 400 Bad Request response code, used when the client has provided an invalid client certificate.",
                "",
                "**Category**: nginx",
            ],
        )?,
        Case::new(
            496,
            "nginx SSL Certificate Required",
            [
                "An expansion of the 400 Bad Request response code, used when a client certificate is required but not provided.",
                "",
                "**Category**: nginx",
            ],
        )?,
        Case::new(
            497,
            "nginx HTTP To HTTPS",
            [
                "An expansion of the 400 Bad Request response code, used when the client has made a HTTP request to a port listening for HTTPS requests.",
                "",
                "**Category**: nginx",
            ],
        )?,
        Case::new(
            499,
            "nginx Client Closed Request",
            [
                "Used when the client has closed the request before the server could send a response.",
                "",
                "**Category**: nginx",
            ],
        )?,
        // Other vendors
        Case::new(
            450,
            "Blocked by Windows Parental Controls",
            [
                "A Microsoft extension. This error is given when Windows Parental Controls are turned on and are blocking access to the given webpage.",
            ],
        )?,
        Case::new(
            498,
            "Token Expired",
            [
                format!(
                    "Returned by {}. A code of 498 indicates an expired or otherwise invalid token.",
                    link(
                        Some("ArcGIS for Server"),
                        "https://en.wikipedia.org/wiki/ArcGIS_Server"
                    )
                ),
                String::new(),
                see_also(
                    Some("Using token-based authentication"),
                    "http://help.arcgis.com/en/arcgisserver/10.0/apis/soap/index.htm#Using_token_authentication.htm",
                ),
            ],
        )?,
        Case::new(
            509,
            "Bandwidth Limit Exceeded",
            [
                "The server has exceeded the bandwidth specified by the server administrator; this is often used by shared hosting providers to limit the bandwidth of customers.".to_string(),
                String::new(),
                see_also(
                    None,
                    "https://documentation.cpanel.net/display/CKB/HTTP+Error+Codes+and+Quick+Fixes#HTTPErrorCodesandQuickFixes-509BandwidthLimitExceeded",
                ),
            ],
        )?,
        Case::new(
            530,
            "Site is frozen",
            [format!(
                "Used by the {} web platform to indicate a site that has been frozen due to inactivity.",
                link(
                    Some("Pantheon"),
                    "https://en.wikipedia.org/wiki/Pantheon_(software)"
                )
            )],
        )?,
        Case::new(
            599,
            "Network Connect Timeout Error",
            [
                "This status code is not specified in any RFCs, but is used by some HTTP proxies to signal a network connect timeout behind the proxy to a client in front of the proxy.",
            ],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_codes() {
        let cases = curated_cases().unwrap();
        let codes: Vec<u16> = cases.iter().map(Case::code).collect();

        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 13);
        assert_eq!(
            sorted,
            vec![418, 440, 444, 449, 450, 495, 496, 497, 498, 499, 509, 530, 599]
        );
    }

    #[test]
    fn test_curated_cases_are_documented() {
        for case in curated_cases().unwrap() {
            assert!(
                !case.comment_lines().is_empty(),
                "curated case {} has no documentation",
                case.code()
            );
        }
    }

    #[test]
    fn test_teapot_references_rfc_2324() {
        let cases = curated_cases().unwrap();
        let teapot = cases.iter().find(|c| c.code() == 418).unwrap();
        assert_eq!(teapot.name(), "I'm A Teapot");
        assert_eq!(
            teapot.comment_lines().last().unwrap(),
            "- seealso: [RFC 2324](http://www.iana.org/go/rfc2324)"
        );
    }

    #[test]
    fn test_overrides_cover_unused_registry_names() {
        let overrides = name_overrides();
        assert_eq!(overrides.resolve(306, "(Unused)"), "Switch Proxy");
    }
}
