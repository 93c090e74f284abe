use serde::Deserialize;

/// A degree-requirement document for a single major
///
/// `requirements` and `specs` have the same shape; they are kept apart so
/// the major record can route each entry into the right list.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementDocument {
    pub major: String,
    #[serde(default)]
    pub requirements: Vec<RequirementEntry>,
    #[serde(default)]
    pub specs: Vec<RequirementEntry>,
}

/// A named requirement composed of count-based sub-requirements
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementEntry {
    pub name: String,
    #[serde(default)]
    pub sub_reqs: Vec<SubReqEntry>,
}

/// "Complete `req_num` of the courses in `req_list`"
#[derive(Debug, Clone, Deserialize)]
pub struct SubReqEntry {
    pub req_num: i32,
    #[serde(default)]
    pub req_list: Vec<String>,
}
