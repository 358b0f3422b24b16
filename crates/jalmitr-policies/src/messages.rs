// SPDX-License-Identifier: Apache-2.0
//! User-facing strings for each supported language.
//!
//! Advice lines are not localized; they stay in English in every language.

use jalmitr_model::{Language, Status};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub select_language: &'static str,
    pub pincode_label: &'static str,
    pub pincode_not_found: &'static str,
    pub district: &'static str,
    pub state: &'static str,
    pub office: &'static str,
    pub type_of_sample: &'static str,
    pub parameter_entry: &'static str,
    pub prediction_result: &'static str,
    pub pass: &'static str,
    pub fail: &'static str,
    pub not_entered: &'static str,
    /// Contains a `{n}` placeholder; use [`Messages::fill_more`].
    pub fill_more: &'static str,
    pub tds_required: &'static str,
    pub safe: &'static str,
    #[serde(rename = "unsafe")]
    pub unsafe_water: &'static str,
    pub advice_title: &'static str,
    pub stp_success: &'static str,
    pub stp_problem: &'static str,
    pub general_advice: &'static str,
}

static EN: Messages = Messages {
    select_language: "Select Language",
    pincode_label: "Pincode (Required):",
    pincode_not_found: "Pincode not found in file!",
    district: "District",
    state: "State",
    office: "Office",
    type_of_sample: "Type of Sample:",
    parameter_entry: "Water Test Parameters Entry",
    prediction_result: "Prediction Result:",
    pass: "✔️ Pass",
    fail: "❌ Fail",
    not_entered: "Not Entered",
    fill_more: "Please fill at least {n} parameters for prediction.",
    tds_required: "TDS value is compulsory!",
    safe: "All parameters are within safe limits. Water is SAFE.",
    unsafe_water: "Unsafe: values out of standard.",
    advice_title: "Advice:",
    stp_success: "Your STP/ETP water is within CPCB limits. Plant is functioning well; water can be reused for non-potable purposes.",
    stp_problem: "STP/ETP Problems found: ",
    general_advice: "General Water Advice:",
};

static HI: Messages = Messages {
    select_language: "भाषा चुनें",
    pincode_label: "पिनकोड (आवश्यक):",
    pincode_not_found: "फाइल में पिनकोड नहीं मिला!",
    district: "जनपद",
    state: "राज्य",
    office: "डाकघर",
    type_of_sample: "नमूने का प्रकार:",
    parameter_entry: "पानी के परीक्षण पैरामीटर",
    prediction_result: "परिणाम:",
    pass: "✔️ पास",
    fail: "❌ फेल",
    not_entered: "डाला नहीं गया",
    fill_more: "कृपया भविष्यवाणी के लिए कम से कम {n} पैरामीटर भरें।",
    tds_required: "टीडीएस मान अनिवार्य है!",
    safe: "सारे मानक सही हैं। पानी सुरिक्षत है।",
    unsafe_water: "असुरक्षित: मानक से बाहर मान।",
    advice_title: "सलाह:",
    stp_success: "आपका एसटीपी/ईटीपी पानी CPCB सीमाओं के भीतर है। संयंत्र ठीक से काम कर रहा है; पानी का पुन: उपयोग किया जा सकता है।",
    stp_problem: "एसटीपी/ईटीपी में समस्या: ",
    general_advice: "सामान्य पानी की सलाह:",
};

static HI_EN: Messages = Messages {
    select_language: "Language / भाषा आप चुनो",
    pincode_label: "Pincode (Required):",
    pincode_not_found: "Pincode file me nahi mila!",
    district: "District",
    state: "State",
    office: "Office",
    type_of_sample: "Type of Sample:",
    parameter_entry: "Water Test Parameters Entry",
    prediction_result: "Result:",
    pass: "✔️ Pass (ठीक)",
    fail: "❌ Fail (गलत)",
    not_entered: "नहीं डाला गया",
    fill_more: "कम से कम {n} parameter भरो।",
    tds_required: "TDS value compulsory hai!",
    safe: "Saare parameters safe hain! Paani surakshit hai.",
    unsafe_water: "Unsafe: Kayi values limit se bahar.",
    advice_title: "Advice / समाधान:",
    stp_success: "Aapka STP/ETP paani limit me hai. Plant sahi hai; isse reuse kar sakte hain.",
    stp_problem: "STP/ETP mein problem: ",
    general_advice: "Paani ki general advice:",
};

#[must_use]
pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::Hi => &HI,
        Language::HiEn => &HI_EN,
        _ => &EN,
    }
}

impl Messages {
    #[must_use]
    pub fn fill_more(&self, n: usize) -> String {
        self.fill_more.replace("{n}", &n.to_string())
    }

    #[must_use]
    pub fn status_label(&self, status: Status) -> &'static str {
        match status {
            Status::Pass => self.pass,
            Status::Fail => self.fail,
            _ => self.not_entered,
        }
    }
}
