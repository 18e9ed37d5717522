use serde_json::{json, Value};

use crate::constant::{TEST_ADMIN_NAME, TEST_ROLE};

/// Successful sign-in response carrying `token`
pub fn sign_in_body(token: &str) -> Value {
    json!({
        "message": "Login successful",
        "token": token,
        "role": TEST_ROLE,
        "name": TEST_ADMIN_NAME
    })
}

pub fn stats_body() -> Value {
    json!({
        "success": true,
        "message": "Stats fetched",
        "data": { "users": 42, "pyqs": 15, "notes": 120, "videos": 7 }
    })
}

/// One branch with one subject
pub fn upload_data_body() -> Value {
    json!({
        "success": true,
        "message": "Upload data fetched",
        "data": {
            "branches": [branch()],
            "subjects": [{
                "subject_id": "1",
                "yearId": 2,
                "subjectname": "Data Structures",
                "branchname": "Computer Science",
                "iscommon": false,
                "branchid": 3
            }]
        }
    })
}

pub fn branches_body() -> Value {
    json!({
        "branches": [branch()],
        "message": "Branches fetched"
    })
}

fn branch() -> Value {
    json!({
        "branch_id": 3,
        "userid": "u-1",
        "displayimage": "https://test-bucket.s3.ap-south-1.amazonaws.com/uploads/branches/computer-science-1700000000000",
        "branchname": "Computer Science",
        "branchcode": "CSE"
    })
}
