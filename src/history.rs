//! Read-only clinic reference data: sample medical and drug history
//! records the dashboard browses, plus the service categories offered by
//! the booking form.

use serde::Serialize;

/// Service categories the booking form offers. The booking core only
/// enforces that a non-empty category was chosen.
pub const SERVICE_TYPES: &[&str] = &[
    "General Checkup",
    "Dental Consultation",
    "Blood Test",
    "Vaccination",
    "Medical Certificate",
    "Counseling",
];

/// One past clinic visit.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecord {
    pub date: &'static str,
    pub service: &'static str,
    pub notes: &'static str,
    pub status: &'static str,
}

/// One dispensed medication.
#[derive(Debug, Clone, Serialize)]
pub struct DrugRecord {
    pub drug_name: &'static str,
    pub brand: &'static str,
    pub issued_by: &'static str,
    pub date: &'static str,
    pub dosage: &'static str,
    pub quantity: &'static str,
}

/// Past visits, newest first.
pub fn medical_history() -> &'static [MedicalRecord] {
    MEDICAL_HISTORY
}

/// Dispensed medications, newest first.
pub fn drug_history() -> &'static [DrugRecord] {
    DRUG_HISTORY
}

static MEDICAL_HISTORY: &[MedicalRecord] = &[
    MedicalRecord {
        date: "2025-01-15",
        service: "General Checkup",
        notes: "Regular health assessment - all vitals normal",
        status: "Completed",
    },
    MedicalRecord {
        date: "2025-01-10",
        service: "Blood Test",
        notes: "Complete blood count - results within normal range",
        status: "Completed",
    },
    MedicalRecord {
        date: "2025-01-05",
        service: "Dental Cleaning",
        notes: "Routine cleaning, no cavities found",
        status: "Completed",
    },
    MedicalRecord {
        date: "2024-12-20",
        service: "Follow-up",
        notes: "Mild fever monitoring - temperature normalized",
        status: "Completed",
    },
    MedicalRecord {
        date: "2024-12-15",
        service: "Vaccination",
        notes: "Flu shot administered - no adverse reactions",
        status: "Completed",
    },
    MedicalRecord {
        date: "2024-12-01",
        service: "General Checkup",
        notes: "Annual physical examination - healthy status",
        status: "Completed",
    },
];

static DRUG_HISTORY: &[DrugRecord] = &[
    DrugRecord {
        drug_name: "Paracetamol",
        brand: "Biogesic",
        issued_by: "Nurse Santos",
        date: "2025-01-12",
        dosage: "500mg",
        quantity: "10 tablets",
    },
    DrugRecord {
        drug_name: "Ibuprofen",
        brand: "Advil",
        issued_by: "Dr. Rodriguez",
        date: "2025-01-08",
        dosage: "200mg",
        quantity: "20 tablets",
    },
    DrugRecord {
        drug_name: "Amoxicillin",
        brand: "Amoxil",
        issued_by: "Dr. Chen",
        date: "2024-12-28",
        dosage: "250mg",
        quantity: "21 capsules",
    },
    DrugRecord {
        drug_name: "Cetirizine",
        brand: "Zyrtec",
        issued_by: "Nurse Martinez",
        date: "2024-12-20",
        dosage: "10mg",
        quantity: "7 tablets",
    },
    DrugRecord {
        drug_name: "Vitamin C",
        brand: "Centrum",
        issued_by: "Pharmacist Lee",
        date: "2024-12-15",
        dosage: "500mg",
        quantity: "30 tablets",
    },
    DrugRecord {
        drug_name: "Omeprazole",
        brand: "Losec",
        issued_by: "Dr. Johnson",
        date: "2024-12-10",
        dosage: "20mg",
        quantity: "14 capsules",
    },
];
