mod timeline_properties;
