use serde::{Deserialize, Serialize};

/// Every screen a route can point at.
///
/// Route JSON refers to these by their snake_case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    // Admission
    AdmissionEnquiries,
    AdmissionApplications,
    AdmissionForm,
    // People
    StudentList,
    StudentPromotion,
    StudentProfile,
    FacultyList,
    FacultyAttendance,
    // Academics
    Classes,
    Subjects,
    AcademicCalendar,
    Timetable,
    MyClasses,
    Attendance,
    Assignments,
    Gradebook,
    ExamSchedule,
    ExamResults,
    // Fees
    FeeStructure,
    FeeCollection,
    FeeReports,
    FeeStatus,
    // Campus
    Transport,
    Library,
    Notices,
    Messages,
    LeaveRequests,
    Settings,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::AdmissionEnquiries => "Admission Enquiries",
            Screen::AdmissionApplications => "Admission Applications",
            Screen::AdmissionForm => "New Admission",
            Screen::StudentList => "Students",
            Screen::StudentPromotion => "Promote Students",
            Screen::StudentProfile => "Student Profile",
            Screen::FacultyList => "Faculty",
            Screen::FacultyAttendance => "Faculty Attendance",
            Screen::Classes => "Classes & Sections",
            Screen::Subjects => "Subjects",
            Screen::AcademicCalendar => "Academic Calendar",
            Screen::Timetable => "Timetable",
            Screen::MyClasses => "My Classes",
            Screen::Attendance => "Attendance",
            Screen::Assignments => "Assignments",
            Screen::Gradebook => "Gradebook",
            Screen::ExamSchedule => "Exam Schedule",
            Screen::ExamResults => "Exam Results",
            Screen::FeeStructure => "Fee Structure",
            Screen::FeeCollection => "Fee Collection",
            Screen::FeeReports => "Fee Reports",
            Screen::FeeStatus => "Fee Status",
            Screen::Transport => "Transport",
            Screen::Library => "Library",
            Screen::Notices => "Notice Board",
            Screen::Messages => "Messages",
            Screen::LeaveRequests => "Leave Requests",
            Screen::Settings => "Settings",
        }
    }

    /// One-line description shown under the screen title
    pub fn summary(self) -> &'static str {
        match self {
            Screen::Dashboard => "Overview of today's activity.",
            Screen::AdmissionEnquiries => "Walk-in and online enquiries awaiting follow-up.",
            Screen::AdmissionApplications => "Submitted applications and their review status.",
            Screen::AdmissionForm => "Register a new applicant.",
            Screen::StudentList => "All enrolled students by class and section.",
            Screen::StudentPromotion => "Move students to the next academic year.",
            Screen::StudentProfile => "Personal, guardian and enrolment details.",
            Screen::FacultyList => "Teaching and support staff directory.",
            Screen::FacultyAttendance => "Daily staff attendance register.",
            Screen::Classes => "Class groups, sections and class teachers.",
            Screen::Subjects => "Subjects offered and their assigned faculty.",
            Screen::AcademicCalendar => "Terms, holidays and school events.",
            Screen::Timetable => "Weekly period schedule.",
            Screen::MyClasses => "Classes you teach this term.",
            Screen::Attendance => "Attendance records by day.",
            Screen::Assignments => "Homework and project submissions.",
            Screen::Gradebook => "Marks entry and grade summaries.",
            Screen::ExamSchedule => "Upcoming examinations and venues.",
            Screen::ExamResults => "Published marks and grades.",
            Screen::FeeStructure => "Fee heads and amounts per class.",
            Screen::FeeCollection => "Record and receipt fee payments.",
            Screen::FeeReports => "Collections, dues and defaulters.",
            Screen::FeeStatus => "Paid and outstanding fees.",
            Screen::Transport => "Routes, vehicles and stop assignments.",
            Screen::Library => "Catalogue, issues and returns.",
            Screen::Notices => "Announcements from the school office.",
            Screen::Messages => "Conversations with teachers and staff.",
            Screen::LeaveRequests => "Apply for and track leave.",
            Screen::Settings => "School profile and portal preferences.",
        }
    }
}
