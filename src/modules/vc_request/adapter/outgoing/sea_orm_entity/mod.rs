pub mod vc_requests;
