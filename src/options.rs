//! Dropdown option catalogs for the prediction form.
//!
//! These are fixed constants matching the values the model was trained on,
//! not derived from any external source at request time.

pub const QUALIFICATIONS: &[&str] = &[
    "PhD", "BBA", "BA", "BCA", "BS", "BE", "B.Tech", "B.Com", "M.Tech", "MBA",
];

pub const LOCATIONS: &[&str] = &[
    "New Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
];

pub const WORK_TYPES: &[&str] = &["Full-Time", "Contract", "Intern", "Part-Time"];

pub const JOB_TITLES: &[&str] = &[
    "Interaction Designer",
    "UX Designer",
    "UI/UX Designer",
    "Software Engineer",
    "Data Scientist",
    "Project Manager",
    "Business Analyst",
    "Graphic Designer",
];

pub const SECTORS: &[&str] = &[
    "Information Technology",
    "Finance",
    "Aerospace & Defense",
    "Healthcare",
    "Automotive",
    "Professional Services",
];

pub const INDUSTRIES: &[&str] = &[
    "Computer Software",
    "Internet",
    "Financial Services",
    "Hospital & Health Care",
    "Automotive",
    "Information Technology and Services",
];
