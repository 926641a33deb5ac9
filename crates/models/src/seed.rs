//! Built-in starting collections, loaded when the catalog is seeded.

use crate::course::Course;
use crate::service::Service;

fn course(id: u64, name: &str, description: &str, duration: &str, fee: &str, category: &str) -> Course {
    Course {
        id,
        name: name.into(),
        description: description.into(),
        duration: duration.into(),
        fee: fee.into(),
        category: category.into(),
    }
}

fn service(id: u64, name: &str, description: &str, price: &str, duration: &str, category: &str) -> Service {
    Service {
        id,
        name: name.into(),
        description: description.into(),
        price: price.into(),
        duration: duration.into(),
        category: category.into(),
    }
}

pub fn seed_courses() -> Vec<Course> {
    vec![
        course(
            1,
            "HIV (VCT) Counselling and Testing",
            "Short course in HIV counselling and testing following national VCT guidelines.",
            "3 months",
            "KES 15,000",
            "Health",
        ),
        course(
            2,
            "Adherence Counselling Certificate",
            "Specialized training in adherence counselling techniques for chronic disease management.",
            "3 months",
            "KES 18,000",
            "Health",
        ),
        course(
            3,
            "Diploma in Counselling",
            "Comprehensive diploma programme in professional counselling.",
            "18 months",
            "KES 65,000",
            "Counselling",
        ),
        course(
            4,
            "Certificate in Counselling",
            "Foundational certificate course in professional counselling.",
            "12 months",
            "KES 45,000",
            "Counselling",
        ),
        course(
            5,
            "Primary Guidance",
            "Guidance and counselling skills for teachers working in primary schools.",
            "6 months",
            "KES 25,000",
            "Education",
        ),
        course(
            6,
            "Kenya Sign Language",
            "Professional training in Kenya Sign Language for inclusive communication and accessibility.",
            "6 months",
            "KES 30,000",
            "Communication",
        ),
        course(
            7,
            "ECDE",
            "Early Childhood Development and Education for aspiring early childhood educators.",
            "1–2 years",
            "KES 45,000 per year",
            "Education",
        ),
        course(
            8,
            "Computer Packages",
            "Comprehensive computer packages training for students and professionals.",
            "3 months",
            "KES 3,500",
            "ICT",
        ),
    ]
}

pub fn seed_services() -> Vec<Service> {
    vec![
        service(
            1,
            "Psychological Counselling",
            "Professional one-on-one and group psychological counselling for individuals, couples and families.",
            "KES 2,500",
            "60 minutes",
            "Mental Health",
        ),
        service(
            2,
            "Family & Marriage Therapy",
            "Specialized therapy services for couples and families to strengthen relationships.",
            "KES 3,500",
            "75 minutes",
            "Family & Marriage",
        ),
        service(
            3,
            "HIV Counselling & Testing",
            "Professional HIV counselling and testing services with confidential support.",
            "KES 500",
            "30 minutes",
            "HIV / VCT",
        ),
        service(
            4,
            "Adolescent Play Therapy",
            "Specialized play therapy services designed for adolescents and young people.",
            "KES 2,000",
            "60 minutes",
            "Adolescent Therapy",
        ),
        service(
            5,
            "Grief & Trauma Counselling",
            "Professional support for individuals dealing with grief, trauma, and loss.",
            "KES 2,500",
            "60 minutes",
            "Trauma & Grief",
        ),
        service(
            6,
            "Student Counselling",
            "Academic and personal counselling services for students at all levels.",
            "KES 1,500",
            "45 minutes",
            "Student Support",
        ),
    ]
}
