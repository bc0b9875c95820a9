//! Built-in portal content.

use chrono::NaiveDate;

use super::*;

fn slide(id: &str, title: &str, subtitle: &str) -> Slide {
    Slide {
        id: id.into(),
        title: title.into(),
        subtitle: Some(subtitle.into()),
        media: None,
        link: None,
        button_text: None,
        category: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub(super) fn site() -> SiteContent {
    SiteContent {
        title: "Self-Discipline Committee".into(),
        tagline: "Self-management, self-service, self-education, self-supervision".into(),
        nav: vec![
            nav("Home", "/", "home"),
            nav("About", "/about", "about"),
            nav("Departments", "/departments", "departments"),
            nav("Activities", "/activities", "activities"),
            nav("Specialties", "/specialties", "specialties"),
            nav("Services", "/services", "services"),
            nav("Recruitment", "/recruitment", "recruitment"),
        ],
        banner: vec![
            Slide {
                link: Some("/about".into()),
                button_text: Some("About us".into()),
                ..slide(
                    "1",
                    "Self-Discipline Committee",
                    "Self-management, self-service, self-education, self-supervision",
                )
            },
            Slide {
                link: Some("/departments".into()),
                button_text: Some("Our departments".into()),
                ..slide(
                    "2",
                    "Departments at work",
                    "Five departments working together for a better campus",
                )
            },
            Slide {
                link: Some("/recruitment".into()),
                button_text: Some("Sign up now".into()),
                ..slide(
                    "3",
                    "Recruitment is open",
                    "Join us, build your skills, make friends",
                )
            },
        ],
        intro: "The Self-Discipline Committee is one of the college's core student \
                organisations. Guided by \"serve classmates, grow yourself\", it builds \
                self-management and teamwork through daily department work, meetings \
                and volunteer service, and helps create a better place to study and live."
            .into(),
        pillars: vec![
            pillar(
                "Purpose",
                "Self-management, self-service, self-education and self-supervision build responsibility and teamwork.",
                "/globe.svg",
            ),
            pillar(
                "Growth",
                "Committee work sharpens organising, communication, coordination and problem solving.",
                "/window.svg",
            ),
            pillar(
                "Practice",
                "A wide practical platform where students gain hands-on experience.",
                "/file.svg",
            ),
        ],
        departments: vec![
            department(
                "Study",
                "Runs study-experience exchanges and lectures and supports a strong learning culture.",
                "/file.svg",
            ),
            department(
                "Office",
                "Handles daily affairs, coordinates departments, keeps records and organises meetings.",
                "/window.svg",
            ),
            department(
                "Dormitory",
                "Manages dormitory life, promotes dorm culture and keeps living areas orderly.",
                "/globe.svg",
            ),
            department(
                "Discipline",
                "Monitors conduct, maintains campus discipline and runs discipline education.",
                "/file.svg",
            ),
            department(
                "Labour",
                "Organises campus labour practice and keeps the campus clean and tidy.",
                "/window.svg",
            ),
        ],
        about: AboutContent {
            overview: "Founded in 2001, the college offers programmes across nursing, \
                       clinical medicine, electronics and IoT, with training bases for \
                       every specialty and partnerships with regional employers."
                .into(),
            timeline: vec![
                timeline("2001", "Founded", "Approved by the provincial government and registered with the ministry."),
                timeline("2005", "Expansion", "A new campus opened and enrolment passed 5000 students."),
                timeline("2010", "Rated excellent", "Passed the national teaching evaluation with an excellent rating."),
                timeline("2015", "Model programme", "Selected as a provincial high-quality vocational college project."),
                timeline("2020", "Upgrade", "Joined the provincial high-level vocational college plan."),
                timeline("2023", "Steady growth", "Became a major vocational education base for the region."),
            ],
            principles: vec![
                principle("Mission", "Train skilled technical talent that serves local development.", "/target.svg"),
                principle("Vision", "A distinctive, high-level vocational college with national standing.", "/flag.svg"),
                principle("Motto", "Virtue in conduct, diligence in study, excellence in skill.", "/book.svg"),
                principle("Approach", "Industry-education integration and school-enterprise cooperation.", "/gear.svg"),
                principle("Goals", "Well-rounded graduates with craftsmanship and strong employability.", "/users.svg"),
                principle("Strategy", "Quality first, distinctive programmes, strong faculty.", "/chart.svg"),
            ],
            achievements: vec![
                Achievement {
                    title: "Teaching award".into(),
                    description: "First prize for provincial teaching achievements.".into(),
                },
                Achievement {
                    title: "Skills contest".into(),
                    description: "The nursing team placed at the national vocational skills contest.".into(),
                },
                Achievement {
                    title: "Employment".into(),
                    description: "Graduate employment rate consistently above 95%.".into(),
                },
            ],
        },
        highlights: vec![
            Slide {
                media: Some("/globe.svg".into()),
                link: Some("/news/admission2024".into()),
                category: Some("Admissions".into()),
                ..slide(
                    "1",
                    "2024 admissions open",
                    "Three new programmes including artificial intelligence and big data",
                )
            },
            Slide {
                media: Some("/window.svg".into()),
                link: Some("/news/award2024".into()),
                category: Some("Honours".into()),
                ..slide(
                    "2",
                    "Provincial teaching award",
                    "The nursing team excelled at the national skills contest",
                )
            },
            Slide {
                media: Some("/file.svg".into()),
                link: Some("/news/culture2024".into()),
                category: Some("Campus life".into()),
                ..slide(
                    "3",
                    "Arts festival opens",
                    "Two weeks of performances and exhibitions by students and staff",
                )
            },
            Slide {
                media: Some("/next.svg".into()),
                link: Some("/news/cooperation2024".into()),
                category: Some("Partnerships".into()),
                ..slide(
                    "4",
                    "Industry partnerships signed",
                    "Strategic agreements with several well-known employers",
                )
            },
        ],
        news_categories: vec![
            Tab::new("recruitment", "Recruitment"),
            Tab::new("department", "Department activity"),
            Tab::new("notice", "Notices"),
            Tab::new("training", "Training"),
        ],
        news: vec![
            NewsItem {
                id: "1".into(),
                title: "2024 committee recruitment starts".into(),
                date: date(2024, 11, 25),
                category: "recruitment".into(),
                summary: "Autumn recruitment is open to every enthusiastic, responsible student.".into(),
                media: "/next.svg".into(),
                important: true,
                link: "/activities/recruitment2024".into(),
            },
            NewsItem {
                id: "2".into(),
                title: "Study department hosts exam-prep exchange".into(),
                date: date(2024, 11, 20),
                category: "department".into(),
                summary: "Top students share how they prepare for final exams.".into(),
                media: "/vercel.svg".into(),
                important: false,
                link: "/activities/study-sharing".into(),
            },
            NewsItem {
                id: "3".into(),
                title: "Campus civility month announced".into(),
                date: date(2024, 11, 18),
                category: "notice".into(),
                summary: "A month of activities promoting courteous behaviour on campus.".into(),
                media: "/globe.svg".into(),
                important: true,
                link: "/activities/civilization-month".into(),
            },
            NewsItem {
                id: "4".into(),
                title: "Dormitory culture festival".into(),
                date: date(2024, 11, 15),
                category: "department".into(),
                summary: "Room decoration contests for a warm, harmonious dorm life.".into(),
                media: "/window.svg".into(),
                important: false,
                link: "/activities/dorm-culture".into(),
            },
        ],
        specialty_categories: vec![
            Tab::new("medical", "Medical"),
            Tab::new("tech", "Technology"),
        ],
        specialties: vec![
            specialty("1", "Nursing", "National backbone programme training skilled nurses", "/globe.svg", "/specialties/nursing", "+", "medical"),
            specialty("2", "Applied Electronics", "Provincial key programme in electronic information", "/window.svg", "/specialties/electronics", "#", "tech"),
            specialty("3", "Clinical Medicine", "Flagship programme for community healthcare", "/file.svg", "/specialties/clinical", "+", "medical"),
            specialty("4", "IoT Technology", "Emerging programme combining IoT and smart systems", "/next.svg", "/specialties/iot", "#", "tech"),
            specialty("5", "Rehabilitation Therapy", "In-demand programme in rehabilitation care", "/vercel.svg", "/specialties/rehabilitation", "+", "medical"),
        ],
        service_categories: vec![
            Tab::new("academic", "Academic").with_icon("/book.svg").with_color("blue"),
            Tab::new("facilities", "Facilities").with_icon("/building.svg").with_color("green"),
            Tab::new("student", "Student services").with_icon("/users.svg").with_color("purple"),
            Tab::new("campus", "Campus life").with_icon("/home.svg").with_color("orange"),
            Tab::new("support", "Support").with_icon("/heart.svg").with_color("red"),
        ],
        services: vec![
            service("1", "Library", "Over 900,000 volumes, e-resources and study spaces.", "/library.svg", "academic", "/services/library", true),
            service("2", "Gymnasium", "Basketball, badminton and table tennis courts.", "/sports.svg", "facilities", "/services/gym", false),
            service("3", "Dormitories", "Air conditioning, private bathrooms and broadband.", "/bed.svg", "campus", "/services/dorm", false),
            service("4", "Career Centre", "Job listings, career planning, CV and interview coaching.", "/briefcase.svg", "student", "/services/career", true),
            service("5", "Canteen", "Several dining halls with varied, affordable meals.", "/food.svg", "campus", "/services/canteen", false),
            service("6", "Medical Centre", "Basic care, health advice and vaccinations.", "/medical.svg", "support", "/services/medical", true),
            service("7", "Computer Centre", "Computer labs, network services and tech support.", "/computer.svg", "academic", "/services/computer", false),
            service("8", "Training Base", "Practical training facilities for every specialty.", "/lab.svg", "academic", "/services/workshop", false),
            service("9", "Counselling Centre", "Counselling, assessments and mental health education.", "/brain.svg", "support", "/services/counseling", false),
            service("10", "Campus Store", "Daily necessities and stationery.", "/shopping.svg", "campus", "/services/supermarket", false),
            service("11", "Student Union", "Cultural events and club activities.", "/users.svg", "student", "/services/student-union", false),
            service("12", "Campus Security", "Round-the-clock patrols and incident response.", "/shield.svg", "support", "/services/security", false),
        ],
        footer: "(c) 2024 Self-Discipline Committee. All rights reserved.".into(),
    }
}

fn nav(label: &str, path: &str, icon: &str) -> NavItem {
    NavItem {
        label: label.into(),
        path: path.into(),
        icon: Some(icon.into()),
    }
}

fn pillar(title: &str, description: &str, icon: &str) -> Pillar {
    Pillar {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn department(name: &str, description: &str, icon: &str) -> Department {
    Department {
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn timeline(year: &str, title: &str, description: &str) -> TimelineEntry {
    TimelineEntry {
        year: year.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn principle(title: &str, description: &str, icon: &str) -> Principle {
    Principle {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn specialty(
    id: &str,
    name: &str,
    description: &str,
    media: &str,
    link: &str,
    icon: &str,
    category: &str,
) -> Specialty {
    Specialty {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        media: media.into(),
        link: link.into(),
        icon: icon.into(),
        category: category.into(),
    }
}

fn service(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    category: &str,
    link: &str,
    featured: bool,
) -> Service {
    Service {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        category: category.into(),
        link: link.into(),
        featured,
    }
}
